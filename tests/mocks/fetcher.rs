use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vidsum::transcript::{FetchError, TranscriptFetcher, TranscriptRecord};

#[derive(Clone)]
pub struct MockFetcher {
    pub records: Arc<Mutex<Vec<TranscriptRecord>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub unavailable: bool,
}

impl MockFetcher {
    /// Serves the given records in order, repeating the last one.
    pub fn serving(records: Vec<TranscriptRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            calls: Arc::new(Mutex::new(Vec::new())),
            unavailable: false,
        }
    }

    /// Behaves like a service answering with a non-200 status.
    pub fn unavailable() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            unavailable: true,
        }
    }
}

pub fn record(title: &str, transcript: &str) -> TranscriptRecord {
    TranscriptRecord {
        title: title.to_string(),
        transcript: transcript.to_string(),
        video_id: "abc123".to_string(),
    }
}

#[async_trait]
impl TranscriptFetcher for MockFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Option<TranscriptRecord>, FetchError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.unavailable {
            return Ok(None);
        }

        let mut records = self.records.lock().unwrap();
        let record = if records.len() > 1 {
            records.remove(0)
        } else {
            records.first().cloned().expect("mock fetcher has no records")
        };
        Ok(Some(record))
    }
}
