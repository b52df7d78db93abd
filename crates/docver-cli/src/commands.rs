use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use docver_cli::git::discover_branches;
use docver_cli::pipeline::{base_url_override, inject_pages, load_config, store_branches};
use docver_cli::types::InjectResult;
use docver_model::SwitcherConfig;
use docver_widget::{build_widget_with, render_html, render_json};

use crate::cli::{BranchesArgs, InjectArgs, RenderArgs, RenderFormatArg};
use crate::summary::print_branches;

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let _span = info_span!("render", release = %args.release).entered();
    let config = load_config(args.config.as_deref())?;
    let widget = build_widget_with(&args.release, &config);
    let rendered = match args.format {
        RenderFormatArg::Html => render_html(&widget),
        RenderFormatArg::Json => render_json(&widget),
    }
    .context("render widget")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("write {}", path.display()))?;
            info!(output = %path.display(), bytes = rendered.len(), "widget written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("write stdout")?;
        }
    }
    Ok(())
}

pub fn run_inject(args: &InjectArgs) -> Result<InjectResult> {
    let _span = info_span!("inject", release = %args.release).entered();
    let config = load_config(args.config.as_deref())?;
    Ok(inject_pages(&args.pages, &args.release, &config))
}

pub fn run_branches(args: &BranchesArgs) -> Result<()> {
    let _span = info_span!("branches", remote = %args.remote).entered();
    let discovered = discover_branches(&args.repo, &args.remote)
        .with_context(|| format!("discover branches in {}", args.repo.display()))?;

    let mut config = match &args.write {
        Some(path) => SwitcherConfig::load_or_default(path)
            .with_context(|| format!("load {}", path.display()))?,
        None => SwitcherConfig::default(),
    };
    config = config.with_base_url_override(base_url_override().as_deref());
    print_branches(&discovered, &config);

    if let Some(path) = &args.write {
        store_branches(path, config, discovered)?;
    }
    Ok(())
}
