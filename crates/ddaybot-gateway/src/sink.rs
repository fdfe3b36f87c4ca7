//! LINE push adapter for the scheduler's delivery seam.

use std::sync::Arc;

use ddaybot_line::LineApi;
use ddaybot_scheduler::DeliverySink;

/// Delivers scheduler messages via the LINE push API.
pub struct LineSink {
    api: Arc<LineApi>,
}

impl LineSink {
    pub fn new(api: Arc<LineApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl DeliverySink for LineSink {
    async fn deliver(&self, to: &str, text: &str) -> anyhow::Result<()> {
        self.api.push_message(to, text).await
    }
}
