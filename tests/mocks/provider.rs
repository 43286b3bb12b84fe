use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vidsum::llm::{LlmError, LlmProvider, SummaryRequest};

#[derive(Clone)]
pub struct MockProvider {
    pub summaries: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<SummaryRequest>>>,
    pub malformed: bool,
}

impl MockProvider {
    /// Answers with the given summaries in order, repeating the last one.
    pub fn answering(summaries: &[&str]) -> Self {
        Self {
            summaries: Arc::new(Mutex::new(summaries.iter().map(|s| s.to_string()).collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
            malformed: false,
        }
    }

    pub fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::answering(&[])
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn answer(&self, request: &SummaryRequest) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        if self.malformed {
            return Err(LlmError::MalformedResponse {
                raw: "<html>bad gateway</html>".to_string(),
            });
        }

        let mut summaries = self.summaries.lock().unwrap();
        if summaries.len() > 1 {
            Ok(summaries.remove(0))
        } else {
            Ok(summaries.first().cloned().unwrap_or_default())
        }
    }
}
