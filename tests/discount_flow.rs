//! End-to-end discount flow over the in-memory repository: create a code,
//! validate it for a purchase, redeem it, and watch the later gates fire.

use std::sync::Arc;

use breezeway_admin::adapters::InMemoryDiscountRepository;
use breezeway_admin::application::handlers::discount::{
    CodeValidation, CreateCodeCommand, CreateCodeHandler, ListActiveCodesHandler,
    RedeemCodeCommand, RedeemCodeHandler, ValidateCodeCommand, ValidateCodeHandler,
};
use breezeway_admin::domain::discount::{DiscountValue, RejectionReason};
use breezeway_admin::domain::foundation::{Money, Percentage, Timestamp, UserId};
use breezeway_admin::ports::DiscountRepository;

fn money(v: i64) -> Money {
    Money::from_minor(v).unwrap()
}

fn create_command(code: &str) -> CreateCodeCommand {
    let now = Timestamp::now();
    CreateCodeCommand {
        code: code.to_string(),
        value: DiscountValue::Percentage(Percentage::try_new(20).unwrap()),
        min_purchase: Some(money(50_000)),
        max_discount: Some(money(30_000)),
        applicable_plans: Vec::new(),
        valid_from: now.minus_days(1),
        valid_to: now.plus_days(30),
        usage_limit: Some(2),
        status: None,
    }
}

fn validate_command(code: &str, amount: i64, user: &str) -> ValidateCodeCommand {
    ValidateCodeCommand {
        code: code.to_string(),
        amount: money(amount),
        user_id: UserId::new(user).unwrap(),
        plan_id: None,
    }
}

#[tokio::test]
async fn full_lifecycle_create_validate_redeem_revalidate() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let create = CreateCodeHandler::new(repository.clone());
    let validate = ValidateCodeHandler::new(repository.clone());
    let redeem = RedeemCodeHandler::new(repository.clone());

    // Create.
    let record = create.handle(create_command("launch20")).await.unwrap();
    assert_eq!(record.code.as_str(), "LAUNCH20");

    // Validate: 20% of 200_000 is 40_000, capped at 30_000.
    let outcome = validate
        .handle(validate_command("LAUNCH20", 200_000, "alice"))
        .await;
    let code_id = match outcome {
        CodeValidation::Accepted {
            discount_amount,
            final_amount,
            code,
        } => {
            assert_eq!(discount_amount, money(30_000));
            assert_eq!(final_amount, money(170_000));
            code.id
        }
        other => panic!("Expected acceptance, got {:?}", other),
    };

    // Redeem for alice.
    redeem
        .handle(RedeemCodeCommand {
            code_id,
            user_id: UserId::new("alice").unwrap(),
        })
        .await
        .unwrap();

    // Alice cannot validate again.
    let again = validate
        .handle(validate_command("LAUNCH20", 200_000, "alice"))
        .await;
    assert!(matches!(
        again,
        CodeValidation::Rejected {
            reason: RejectionReason::AlreadyRedeemed
        }
    ));

    // Bob still can.
    let bob = validate
        .handle(validate_command("LAUNCH20", 200_000, "bob"))
        .await;
    assert!(bob.is_accepted());
}

#[tokio::test]
async fn usage_limit_closes_the_code_for_everyone() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let create = CreateCodeHandler::new(repository.clone());
    let validate = ValidateCodeHandler::new(repository.clone());
    let redeem = RedeemCodeHandler::new(repository.clone());

    let record = create.handle(create_command("duo-deal")).await.unwrap();

    for user in ["alice", "bob"] {
        redeem
            .handle(RedeemCodeCommand {
                code_id: record.id,
                user_id: UserId::new(user).unwrap(),
            })
            .await
            .unwrap();
    }

    // Limit of two reached: carol is turned away at the usage gate.
    let carol = validate
        .handle(validate_command("DUO-DEAL", 200_000, "carol"))
        .await;
    assert!(matches!(
        carol,
        CodeValidation::Rejected {
            reason: RejectionReason::UsageLimitReached { used: 2, limit: 2 }
        }
    ));
}

#[tokio::test]
async fn minimum_purchase_gate_fires_before_discount_math() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let create = CreateCodeHandler::new(repository.clone());
    let validate = ValidateCodeHandler::new(repository.clone());

    create.handle(create_command("bigorders")).await.unwrap();

    let outcome = validate
        .handle(validate_command("BIGORDERS", 49_999, "alice"))
        .await;
    assert!(matches!(
        outcome,
        CodeValidation::Rejected {
            reason: RejectionReason::MinPurchaseNotMet { .. }
        }
    ));
}

#[tokio::test]
async fn expired_code_disappears_from_the_active_listing_and_store() {
    let repository: Arc<dyn DiscountRepository> = Arc::new(InMemoryDiscountRepository::new());
    let create = CreateCodeHandler::new(repository.clone());
    let validate = ValidateCodeHandler::new(repository.clone());
    let list = ListActiveCodesHandler::new(repository.clone());

    // A code whose window already closed.
    let now = Timestamp::now();
    let mut cmd = create_command("bygone25");
    cmd.valid_from = now.minus_days(60);
    cmd.valid_to = now.minus_days(30);
    let record = create.handle(cmd).await.unwrap();

    // The read-time filter already hides it.
    assert!(list.handle().await.is_empty());

    // Validation observes the closed window and persists the expiry.
    let outcome = validate
        .handle(validate_command("BYGONE25", 200_000, "alice"))
        .await;
    assert!(matches!(
        outcome,
        CodeValidation::Rejected {
            reason: RejectionReason::Expired { .. }
        }
    ));

    let stored = repository.find_by_id(&record.id).await.unwrap().unwrap();
    assert!(!stored.status.is_active());
}
