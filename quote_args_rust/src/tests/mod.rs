use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use routing_models::constants::chains::ChainId;
use routing_models::models::amount::CurrencyAmount;
use routing_models::models::currency::Currency;
use routing_models::models::types::{TradeType, WrapType};

use crate::error::QuoteArgsResult;
use crate::flags::StaticFlagReader;
use crate::models::derived::DerivedSwapInfo;
use crate::routing::RouterPreference;
use crate::routing::builder::{QuoteArgumentBuilder, QuoteRequestInputs};
use crate::routing::fetch::{QuoteDispatcher, QuoteFetcher, QuoteResponse};
use crate::routing::types::QuoteArguments;

/// In-memory quote backend counting how many requests actually went out
#[derive(Default)]
struct CountingFetcher {
    calls: Arc<AtomicUsize>,
}

impl CountingFetcher {
    fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl QuoteFetcher for CountingFetcher {
    async fn fetch_quote(
        &self,
        args: &crate::routing::types::GetQuoteArgs,
    ) -> QuoteArgsResult<QuoteResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(QuoteResponse {
            amount_quote: args.amount / 2,
            amount_limit: args.amount / 2,
            router_data: serde_json::json!({ "route": [] }),
        })
    }
}

fn eth() -> Currency {
    Currency::native(ChainId::Base)
}

fn usdc() -> Currency {
    Currency::token(
        ChainId::Base,
        "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
        6,
        "USDC",
    )
}

fn valid_inputs() -> QuoteRequestInputs {
    QuoteRequestInputs {
        account: None,
        token_in: Some(eth()),
        token_out: Some(usdc()),
        amount: Some(CurrencyAmount::new(eth(), 2_000_000_000_000_000_000)),
        trade_type: TradeType::ExactIn,
        router_preference: RouterPreference::Api,
    }
}

#[tokio::test]
async fn test_skip_never_reaches_the_fetcher() {
    crate::init_tracing_in_tests();
    let dispatcher = QuoteDispatcher::new(CountingFetcher::default());

    let response = dispatcher
        .dispatch(&QuoteArguments::Skip)
        .await
        .expect("dispatch failed");
    assert!(response.is_none());
    assert_eq!(dispatcher.cached_quotes(), 0);
}

#[tokio::test]
async fn test_structurally_equal_requests_fetch_once() {
    let mut builder = QuoteArgumentBuilder::new(Arc::new(StaticFlagReader::default()));
    let fetcher = CountingFetcher::default();
    let calls = fetcher.counter();
    let dispatcher = QuoteDispatcher::new(fetcher);

    let arguments = builder.build(valid_inputs());
    let first = dispatcher
        .dispatch(&arguments)
        .await
        .expect("dispatch failed")
        .expect("expected a response");

    // A structurally equal payload built from scratch hits the same cache key
    let rebuilt = builder.build(valid_inputs());
    let second = dispatcher
        .dispatch(&rebuilt)
        .await
        .expect("dispatch failed")
        .expect("expected a response");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(dispatcher.cached_quotes(), 1);
}

#[tokio::test]
async fn test_changed_inputs_fetch_again() {
    let mut builder = QuoteArgumentBuilder::new(Arc::new(StaticFlagReader::default()));
    let fetcher = CountingFetcher::default();
    let calls = fetcher.counter();
    let dispatcher = QuoteDispatcher::new(fetcher);

    let arguments = builder.build(valid_inputs());
    dispatcher.dispatch(&arguments).await.expect("dispatch failed");

    let mut inputs = valid_inputs();
    inputs.amount = Some(CurrencyAmount::new(eth(), 3_000_000_000_000_000_000));
    let arguments = builder.build(inputs);
    dispatcher.dispatch(&arguments).await.expect("dispatch failed");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(dispatcher.cached_quotes(), 2);

    dispatcher.invalidate();
    assert_eq!(dispatcher.cached_quotes(), 0);
}

#[tokio::test]
async fn test_derived_swap_info_flow() {
    let info = DerivedSwapInfo {
        chain_id: ChainId::Base,
        input_currency: Some(eth()),
        output_currency: Some(usdc()),
        input_amount: Some(CurrencyAmount::new(eth(), 1_000_000_000_000_000_000)),
        output_amount: None,
        trade: None,
        wrap_type: WrapType::NotApplicable,
        focus_on_currency_field: None,
        auto_slippage_tolerance: Some(0.5),
        custom_slippage_tolerance: None,
    };

    let mut builder = QuoteArgumentBuilder::new(Arc::new(StaticFlagReader::default()));
    let dispatcher = QuoteDispatcher::new(CountingFetcher::default());

    let inputs = info.quote_request_inputs(None, TradeType::ExactIn, RouterPreference::Price);
    let arguments = builder.build(inputs);
    let args = arguments.args().expect("expected arguments");
    assert!(!args.send_portion_enabled);
    assert!(args.needs_wrap_if_uniswap_x);

    let response = dispatcher
        .dispatch(&arguments)
        .await
        .expect("dispatch failed")
        .expect("expected a response");
    assert_eq!(response.amount_quote, 500_000_000_000_000_000);

    // An exact OUT request has no fixed amount here: builder must skip and
    // the dispatcher must stay silent
    let inputs = info.quote_request_inputs(None, TradeType::ExactOut, RouterPreference::Price);
    let arguments = builder.build(inputs);
    assert!(arguments.is_skip());
    let response = dispatcher
        .dispatch(&arguments)
        .await
        .expect("dispatch failed");
    assert!(response.is_none());
}
