//! Concurrency tests for the atomic redemption primitive.
//!
//! Two callers that each validated against `used_count < usage_limit` must
//! not both get through `redeem`: the check-and-increment is one atomic
//! operation, so the usage limit holds under any interleaving. A naive
//! read-modify-write implementation fails these tests.

use std::sync::Arc;

use futures::future::join_all;

use breezeway_admin::adapters::InMemoryDiscountRepository;
use breezeway_admin::application::handlers::discount::{RedeemCodeCommand, RedeemCodeHandler};
use breezeway_admin::domain::discount::{
    CodeKey, CodeStatus, DiscountCode, DiscountValue, NewDiscountCode,
};
use breezeway_admin::domain::foundation::{DiscountCodeId, Money, Timestamp, UserId};
use breezeway_admin::ports::DiscountRepository;

fn limited_code(key: &str, usage_limit: u32) -> DiscountCode {
    let now = Timestamp::now();
    DiscountCode::create(
        DiscountCodeId::new(),
        NewDiscountCode {
            code: CodeKey::try_new(key).unwrap(),
            value: DiscountValue::Fixed(Money::from_minor(10_000).unwrap()),
            min_purchase: None,
            max_discount: None,
            applicable_plans: Vec::new(),
            valid_from: now.minus_days(1),
            valid_to: now.plus_days(30),
            usage_limit: Some(usage_limit),
            status: CodeStatus::Active,
        },
        now,
    )
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_redeems_cannot_exceed_a_limit_of_one() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let code = limited_code("FLASH-SALE", 1);
    repository.insert(&code).await.unwrap();

    let attempts = 32;
    let tasks: Vec<_> = (0..attempts)
        .map(|i| {
            let repository = repository.clone();
            let code_id = code.id;
            tokio::spawn(async move {
                let handler = RedeemCodeHandler::new(repository);
                handler
                    .handle(RedeemCodeCommand {
                        code_id,
                        user_id: UserId::new(format!("user-{}", i)).unwrap(),
                    })
                    .await
            })
        })
        .collect();

    let results = join_all(tasks).await;
    let successes = results
        .into_iter()
        .filter(|r| matches!(r, Ok(Ok(()))))
        .count();

    assert_eq!(successes, 1, "exactly one racer may redeem the last slot");

    let stored = repository.find_by_id(&code.id).await.unwrap().unwrap();
    assert_eq!(stored.used_count, 1);
    assert_eq!(stored.used_by.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_redeems_by_one_user_record_at_most_once() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let code = limited_code("LOYALTY-26", 100);
    repository.insert(&code).await.unwrap();

    let user = UserId::new("repeat-customer").unwrap();
    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let repository = repository.clone();
            let code_id = code.id;
            let user = user.clone();
            tokio::spawn(async move {
                let handler = RedeemCodeHandler::new(repository);
                handler.handle(RedeemCodeCommand { code_id, user_id: user }).await
            })
        })
        .collect();

    let results = join_all(tasks).await;
    let successes = results
        .into_iter()
        .filter(|r| matches!(r, Ok(Ok(()))))
        .count();

    assert_eq!(successes, 1, "one user may redeem a code at most once");

    let stored = repository.find_by_id(&code.id).await.unwrap().unwrap();
    assert_eq!(stored.used_count, 1);
    assert_eq!(stored.used_by, vec![user]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn usage_count_equals_redeemer_set_size_under_contention() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let code = limited_code("BULK-26", 10);
    repository.insert(&code).await.unwrap();

    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let repository = repository.clone();
            let code_id = code.id;
            tokio::spawn(async move {
                let handler = RedeemCodeHandler::new(repository);
                handler
                    .handle(RedeemCodeCommand {
                        code_id,
                        user_id: UserId::new(format!("user-{}", i)).unwrap(),
                    })
                    .await
            })
        })
        .collect();

    join_all(tasks).await;

    let stored = repository.find_by_id(&code.id).await.unwrap().unwrap();
    assert_eq!(stored.used_count, 10);
    assert_eq!(stored.used_count as usize, stored.used_by.len());
}
