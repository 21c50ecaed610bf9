use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::sync::Arc;

use crate::error::QuoteArgsResult;
use crate::routing::types::{GetQuoteArgs, QuoteArguments};

/// Response of a quote backend, transport-agnostic.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Amount IN for exact OUT trades or amount OUT for exact IN trades
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub amount_quote: u128,
    /// Amount IN MAX for exact OUT trades or amount OUT MIN for exact IN trades
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub amount_limit: u128,
    /// Response data specific to the quoting backend
    pub router_data: serde_json::Value,
}

/// The actual transport. Implementations live outside this crate; tests use
/// an in-memory fake.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch_quote(&self, args: &GetQuoteArgs) -> QuoteArgsResult<QuoteResponse>;
}

/// Enforces the consumer contract of the argument builder: a `Skip` never
/// issues a fetch, and structurally equal argument payloads share one cache
/// entry, so repeating a request is served without a second round trip.
pub struct QuoteDispatcher<F> {
    fetcher: F,
    cache: DashMap<GetQuoteArgs, Arc<QuoteResponse>>,
}

impl<F: QuoteFetcher> QuoteDispatcher<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: DashMap::new(),
        }
    }

    pub async fn dispatch(
        &self,
        arguments: &QuoteArguments,
    ) -> QuoteArgsResult<Option<Arc<QuoteResponse>>> {
        let args = match arguments {
            QuoteArguments::Skip => {
                tracing::debug!("Quote arguments are Skip, not issuing a request");
                return Ok(None);
            }
            QuoteArguments::Args(args) => args,
        };

        if let Some(cached) = self.cache.get(args) {
            return Ok(Some(Arc::clone(&cached)));
        }

        let response = Arc::new(self.fetcher.fetch_quote(args).await?);
        self.cache.insert(args.clone(), Arc::clone(&response));

        Ok(Some(response))
    }

    /// Drops every cached quote. Callers do this when upstream data the
    /// quotes depend on (block, balances) moves on.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn cached_quotes(&self) -> usize {
        self.cache.len()
    }
}
