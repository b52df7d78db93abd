use std::path::PathBuf;

#[derive(Debug)]
pub struct InjectResult {
    pub release: String,
    pub pages: Vec<PageOutcome>,
}

impl InjectResult {
    pub fn failed(&self) -> usize {
        self.pages.iter().filter(|page| page.error.is_some()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.failed() > 0
    }
}

#[derive(Debug)]
pub struct PageOutcome {
    pub path: PathBuf,
    pub bytes_added: usize,
    pub error: Option<String>,
}
