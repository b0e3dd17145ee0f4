//! PostgreSQL implementation of DiscountRepository.
//!
//! One flat row per code. The redeemer set and plan scope are TEXT[]
//! columns, so the redemption check-and-increment can run as a single
//! conditional UPDATE with no read-modify-write window.

use crate::domain::discount::{CodeKey, CodeStatus, DiscountCode, DiscountValue};
use crate::domain::foundation::{
    DiscountCodeId, DomainError, ErrorCode, Money, Percentage, PlanId, Timestamp, UserId,
};
use crate::ports::{DiscountRepository, RedemptionOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the DiscountRepository port.
pub struct PostgresDiscountRepository {
    pool: PgPool,
}

impl PostgresDiscountRepository {
    /// Creates a new PostgresDiscountRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a discount code.
#[derive(Debug, sqlx::FromRow)]
struct DiscountCodeRow {
    id: Uuid,
    code: String,
    value_kind: String,
    value_amount: i64,
    min_purchase: Option<i64>,
    max_discount: Option<i64>,
    applicable_plans: Vec<String>,
    valid_from: DateTime<Utc>,
    valid_to: DateTime<Utc>,
    usage_limit: Option<i32>,
    used_count: i32,
    used_by: Vec<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DiscountCodeRow> for DiscountCode {
    type Error = DomainError;

    fn try_from(row: DiscountCodeRow) -> Result<Self, Self::Error> {
        let code = CodeKey::try_new(&row.code)
            .map_err(|e| DomainError::database(format!("Invalid stored code: {}", e)))?;
        let value = parse_value(&row.value_kind, row.value_amount)?;
        let status = parse_status(&row.status)?;

        let min_purchase = row.min_purchase.map(parse_money).transpose()?;
        let max_discount = row.max_discount.map(parse_money).transpose()?;

        let applicable_plans = row
            .applicable_plans
            .into_iter()
            .map(|p| {
                PlanId::new(p)
                    .map_err(|e| DomainError::database(format!("Invalid stored plan: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let used_by = row
            .used_by
            .into_iter()
            .map(|u| {
                UserId::new(u)
                    .map_err(|e| DomainError::database(format!("Invalid stored user: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DiscountCode {
            id: DiscountCodeId::from_uuid(row.id),
            code,
            value,
            min_purchase,
            max_discount,
            applicable_plans,
            valid_from: Timestamp::from_datetime(row.valid_from),
            valid_to: Timestamp::from_datetime(row.valid_to),
            usage_limit: row.usage_limit.map(|l| l as u32),
            used_count: row.used_count as u32,
            used_by,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_money(minor: i64) -> Result<Money, DomainError> {
    Money::from_minor(minor)
        .map_err(|e| DomainError::database(format!("Invalid stored amount: {}", e)))
}

fn parse_value(kind: &str, amount: i64) -> Result<DiscountValue, DomainError> {
    match kind {
        "percentage" => {
            let pct = u8::try_from(amount)
                .ok()
                .and_then(|v| Percentage::try_new(v).ok())
                .ok_or_else(|| {
                    DomainError::database(format!("Invalid stored percentage: {}", amount))
                })?;
            Ok(DiscountValue::Percentage(pct))
        }
        "fixed" => Ok(DiscountValue::Fixed(parse_money(amount)?)),
        _ => Err(DomainError::database(format!(
            "Invalid value kind: {}",
            kind
        ))),
    }
}

fn value_to_columns(value: &DiscountValue) -> (&'static str, i64) {
    match value {
        DiscountValue::Percentage(pct) => ("percentage", i64::from(pct.value())),
        DiscountValue::Fixed(money) => ("fixed", money.minor()),
    }
}

fn parse_status(s: &str) -> Result<CodeStatus, DomainError> {
    match s {
        "active" => Ok(CodeStatus::Active),
        "inactive" => Ok(CodeStatus::Inactive),
        "expired" => Ok(CodeStatus::Expired),
        _ => Err(DomainError::database(format!("Invalid status value: {}", s))),
    }
}

fn status_to_string(status: &CodeStatus) -> &'static str {
    match status {
        CodeStatus::Active => "active",
        CodeStatus::Inactive => "inactive",
        CodeStatus::Expired => "expired",
    }
}

fn plans_to_strings(plans: &[PlanId]) -> Vec<String> {
    plans.iter().map(|p| p.as_str().to_string()).collect()
}

fn users_to_strings(users: &[UserId]) -> Vec<String> {
    users.iter().map(|u| u.as_str().to_string()).collect()
}

const SELECT_COLUMNS: &str = "id, code, value_kind, value_amount, min_purchase, max_discount, \
     applicable_plans, valid_from, valid_to, usage_limit, used_count, used_by, \
     status, created_at, updated_at";

#[async_trait]
impl DiscountRepository for PostgresDiscountRepository {
    async fn insert(&self, code: &DiscountCode) -> Result<(), DomainError> {
        let (value_kind, value_amount) = value_to_columns(&code.value);

        sqlx::query(
            r#"
            INSERT INTO discount_codes (
                id, code, value_kind, value_amount, min_purchase, max_discount,
                applicable_plans, valid_from, valid_to, usage_limit, used_count,
                used_by, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(code.id.as_uuid())
        .bind(code.code.as_str())
        .bind(value_kind)
        .bind(value_amount)
        .bind(code.min_purchase.map(|m| m.minor()))
        .bind(code.max_discount.map(|m| m.minor()))
        .bind(plans_to_strings(&code.applicable_plans))
        .bind(code.valid_from.as_datetime())
        .bind(code.valid_to.as_datetime())
        .bind(code.usage_limit.map(|l| l as i32))
        .bind(code.used_count as i32)
        .bind(users_to_strings(&code.used_by))
        .bind(status_to_string(&code.status))
        .bind(code.created_at.as_datetime())
        .bind(code.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("discount_codes_live_code_key") {
                    return DomainError::new(
                        ErrorCode::DuplicateCode,
                        format!("Discount code '{}' already exists", code.code),
                    );
                }
            }
            DomainError::database(format!("Failed to insert discount code: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, code: &DiscountCode) -> Result<(), DomainError> {
        let (value_kind, value_amount) = value_to_columns(&code.value);

        let result = sqlx::query(
            r#"
            UPDATE discount_codes SET
                value_kind = $2,
                value_amount = $3,
                min_purchase = $4,
                max_discount = $5,
                applicable_plans = $6,
                valid_from = $7,
                valid_to = $8,
                usage_limit = $9,
                status = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(code.id.as_uuid())
        .bind(value_kind)
        .bind(value_amount)
        .bind(code.min_purchase.map(|m| m.minor()))
        .bind(code.max_discount.map(|m| m.minor()))
        .bind(plans_to_strings(&code.applicable_plans))
        .bind(code.valid_from.as_datetime())
        .bind(code.valid_to.as_datetime())
        .bind(code.usage_limit.map(|l| l as i32))
        .bind(status_to_string(&code.status))
        .bind(code.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update discount code: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &DiscountCodeId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM discount_codes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete discount code: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DiscountCodeId) -> Result<Option<DiscountCode>, DomainError> {
        let row: Option<DiscountCodeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM discount_codes WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find discount code: {}", e)))?;

        row.map(DiscountCode::try_from).transpose()
    }

    async fn find_active_by_code(
        &self,
        code: &CodeKey,
    ) -> Result<Option<DiscountCode>, DomainError> {
        let row: Option<DiscountCodeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM discount_codes WHERE code = $1 AND status = 'active'",
            SELECT_COLUMNS
        ))
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find discount code: {}", e)))?;

        row.map(DiscountCode::try_from).transpose()
    }

    async fn is_code_taken(&self, code: &CodeKey) -> Result<bool, DomainError> {
        let taken: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM discount_codes WHERE code = $1 AND status <> 'expired' LIMIT 1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check code uniqueness: {}", e)))?;

        Ok(taken.is_some())
    }

    async fn list_active(&self, now: Timestamp) -> Result<Vec<DiscountCode>, DomainError> {
        let rows: Vec<DiscountCodeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM discount_codes \
             WHERE status = 'active' AND valid_to >= $1 \
             ORDER BY valid_to ASC",
            SELECT_COLUMNS
        ))
        .bind(now.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list discount codes: {}", e)))?;

        rows.into_iter().map(DiscountCode::try_from).collect()
    }

    async fn mark_expired(
        &self,
        id: &DiscountCodeId,
        observed_at: Timestamp,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE discount_codes SET status = 'expired', updated_at = $2 WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(observed_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to mark code expired: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            ));
        }

        Ok(())
    }

    async fn redeem(
        &self,
        id: &DiscountCodeId,
        user: &UserId,
    ) -> Result<RedemptionOutcome, DomainError> {
        // The whole check-and-increment runs server-side in one statement, so
        // two racing callers cannot both pass the usage-limit check.
        let result = sqlx::query(
            r#"
            UPDATE discount_codes SET
                used_count = used_count + 1,
                used_by = array_append(used_by, $2),
                updated_at = now()
            WHERE id = $1
              AND status = 'active'
              AND (usage_limit IS NULL OR used_count < usage_limit)
              AND NOT ($2 = ANY(used_by))
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to redeem discount code: {}", e)))?;

        if result.rows_affected() > 0 {
            return Ok(RedemptionOutcome::Redeemed);
        }

        // Zero rows: classify why by re-reading through the domain predicate.
        match self.find_by_id(id).await? {
            None => Ok(RedemptionOutcome::NotFound),
            Some(code) => match code.redemption_block(user) {
                Some(block) => Ok(RedemptionOutcome::Blocked(block)),
                // The row changed between the two statements.
                None => Err(DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    "Discount code changed during redemption; retry",
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_works_for_all_values() {
        assert_eq!(parse_status("active").unwrap(), CodeStatus::Active);
        assert_eq!(parse_status("inactive").unwrap(), CodeStatus::Inactive);
        assert_eq!(parse_status("expired").unwrap(), CodeStatus::Expired);
    }

    #[test]
    fn parse_status_rejects_invalid_values() {
        assert!(parse_status("paused").is_err());
        assert!(parse_status("").is_err());
    }

    #[test]
    fn roundtrip_status_conversion() {
        for status in [CodeStatus::Active, CodeStatus::Inactive, CodeStatus::Expired] {
            let s = status_to_string(&status);
            assert_eq!(parse_status(s).unwrap(), status);
        }
    }

    #[test]
    fn parse_value_reads_percentage() {
        let value = parse_value("percentage", 25).unwrap();
        assert_eq!(
            value,
            DiscountValue::Percentage(Percentage::try_new(25).unwrap())
        );
    }

    #[test]
    fn parse_value_reads_fixed() {
        let value = parse_value("fixed", 50_000).unwrap();
        assert_eq!(value, DiscountValue::Fixed(Money::from_minor(50_000).unwrap()));
    }

    #[test]
    fn parse_value_rejects_bad_kind_and_range() {
        assert!(parse_value("bogus", 10).is_err());
        assert!(parse_value("percentage", 101).is_err());
        assert!(parse_value("percentage", -1).is_err());
        assert!(parse_value("fixed", -1).is_err());
    }

    #[test]
    fn roundtrip_value_conversion() {
        for value in [
            DiscountValue::Percentage(Percentage::try_new(100).unwrap()),
            DiscountValue::Fixed(Money::from_minor(123_45).unwrap()),
        ] {
            let (kind, amount) = value_to_columns(&value);
            assert_eq!(parse_value(kind, amount).unwrap(), value);
        }
    }
}
