use anyhow::Result;

use crate::domain::quote::Quote;

#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;
}
