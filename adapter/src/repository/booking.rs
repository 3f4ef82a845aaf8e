use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{
            AcceptBooking, CompleteBooking, ConfirmPayment, CreateBooking, DeclineBooking,
            PayProvider,
        },
        provider_payout, Booking, BookingStatus, PaymentStatus,
    },
    id::{BookingId, UserId},
    role::Role,
};
use kernel::repository::booking::BookingRepository;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation,
    model::booking::{BookingRow, BookingStateRow},
    ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

const FIND_BOOKING_BASE: &str = r#"
    SELECT
        b.booking_id,
        b.provider_id,
        b.status,
        b.payment_status,
        b.provider_payment_status,
        b.payment_amount,
        b.provider_payment,
        b.platform_fee_percentage,
        b.created_at,
        e.event_id,
        e.title,
        e.date,
        e.location,
        e.client_id
    FROM bookings AS b
    LEFT JOIN events AS e ON b.event_id = e.event_id
"#;

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // Pre-checks inside the transaction:
        // - the event exists and belongs to the requesting client
        // - the targeted user exists and actually is a provider
        // The (event, provider) uniqueness itself is left to the
        // constraint so two concurrent requests cannot both slip past
        // an application-level lookup.
        {
            let client_id: Option<UserId> =
                sqlx::query_scalar("SELECT client_id FROM events WHERE event_id = $1")
                    .bind(event.event_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;

            let Some(client_id) = client_id else {
                return Err(AppError::EntityNotFound(format!(
                    "event ({}) not found",
                    event.event_id
                )));
            };
            if client_id != event.requested_client {
                return Err(AppError::ForbiddenOperation);
            }

            let role: Option<String> =
                sqlx::query_scalar("SELECT role FROM users WHERE user_id = $1")
                    .bind(event.provider_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;

            let Some(role) = role else {
                return Err(AppError::EntityNotFound(format!(
                    "provider ({}) not found",
                    event.provider_id
                )));
            };
            if role.parse::<Role>().ok() != Some(Role::Provider) {
                return Err(AppError::UnprocessableEntity(format!(
                    "user ({}) is not a provider",
                    event.provider_id
                )));
            }
        }

        let booking_id = BookingId::new();
        sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, event_id, provider_id, status)
                VALUES ($1, $2, $3, 'pending')
            "#,
        )
        .bind(booking_id)
        .bind(event.event_id)
        .bind(event.provider_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::UnprocessableEntity(
                    "this provider is already booked for this event".into(),
                )
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> =
            sqlx::query_as(&format!("{FIND_BOOKING_BASE} WHERE b.booking_id = $1"))
                .bind(booking_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_provider(&self, provider_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{FIND_BOOKING_BASE} WHERE b.provider_id = $1 ORDER BY b.created_at ASC"
        ))
        .bind(provider_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_client(&self, client_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{FIND_BOOKING_BASE} WHERE e.client_id = $1 ORDER BY b.created_at ASC"
        ))
        .bind(client_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> =
            sqlx::query_as(&format!("{FIND_BOOKING_BASE} ORDER BY b.created_at ASC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn accept(&self, event: AcceptBooking) -> AppResult<()> {
        self.transition(event.booking_id, event.provider_id, BookingStatus::Confirmed)
            .await
    }

    async fn decline(&self, event: DeclineBooking) -> AppResult<()> {
        self.transition(event.booking_id, event.provider_id, BookingStatus::Cancelled)
            .await
    }

    async fn confirm_payment(&self, event: ConfirmPayment) -> AppResult<()> {
        if event.payment_amount <= Decimal::ZERO {
            return Err(AppError::UnprocessableEntity(
                "payment amount must be positive".into(),
            ));
        }

        let mut tx = self.db.begin().await?;
        let state = self.fetch_state_for_update(&mut tx, event.booking_id).await?;
        if state.provider_id != event.provider_id {
            return Err(AppError::ForbiddenOperation);
        }

        // No restriction on the prior status here; only the amount and
        // the acting provider are checked.
        sqlx::query(
            r#"
                UPDATE bookings
                SET payment_status = 'paid', payment_amount = $1
                WHERE booking_id = $2
            "#,
        )
        .bind(event.payment_amount)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)
    }

    async fn complete(&self, event: CompleteBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        let state = self.fetch_state_for_update(&mut tx, event.booking_id).await?;
        if state.provider_id != event.provider_id {
            return Err(AppError::ForbiddenOperation);
        }
        if state.payment_status()? != PaymentStatus::Paid {
            return Err(AppError::UnprocessableEntity(
                "cannot complete the booking before payment is confirmed".into(),
            ));
        }
        let status = state.status()?;
        if !status.can_transition_to(BookingStatus::Completed) {
            return Err(AppError::UnprocessableEntity(format!(
                "a {status} booking cannot be completed"
            )));
        }

        sqlx::query("UPDATE bookings SET status = 'completed' WHERE booking_id = $1")
            .bind(event.booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)
    }

    async fn pay_provider(&self, event: PayProvider) -> AppResult<Decimal> {
        let mut tx = self.db.begin().await?;
        let state = self.fetch_state_for_update(&mut tx, event.booking_id).await?;
        if state.payment_status()? != PaymentStatus::Paid {
            return Err(AppError::UnprocessableEntity(
                "cannot pay the provider before the client payment is recorded".into(),
            ));
        }
        if state.provider_payment_status()? == PaymentStatus::Paid {
            return Err(AppError::UnprocessableEntity(
                "the provider has already been paid for this booking".into(),
            ));
        }
        let Some(payment_amount) = state.payment_amount else {
            return Err(AppError::UnprocessableEntity(
                "no payment amount recorded for this booking".into(),
            ));
        };

        let payout = provider_payout(payment_amount, state.platform_fee_percentage);
        sqlx::query(
            r#"
                UPDATE bookings
                SET provider_payment = $1, provider_payment_status = 'paid'
                WHERE booking_id = $2
            "#,
        )
        .bind(payout)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(payout)
    }

    async fn count_confirmed_by_provider(&self, provider_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM bookings
                WHERE provider_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(provider_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn client_has_confirmed_booking(
        &self,
        client_id: UserId,
        provider_id: UserId,
    ) -> AppResult<bool> {
        sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1
                    FROM bookings AS b
                    INNER JOIN events AS e ON b.event_id = e.event_id
                    WHERE e.client_id = $1
                      AND b.provider_id = $2
                      AND b.status = 'confirmed'
                )
            "#,
        )
        .bind(client_id)
        .bind(provider_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // Locks the row so the guard and the following UPDATE see the same
    // state even under concurrent requests.
    async fn fetch_state_for_update(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking_id: BookingId,
    ) -> AppResult<BookingStateRow> {
        let state: Option<BookingStateRow> = sqlx::query_as(
            r#"
                SELECT
                    booking_id, provider_id, status, payment_status,
                    provider_payment_status, payment_amount,
                    platform_fee_percentage
                FROM bookings
                WHERE booking_id = $1
                FOR UPDATE
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        state.ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({booking_id}) not found"))
        })
    }

    // accept and decline only differ in the target state.
    async fn transition(
        &self,
        booking_id: BookingId,
        provider_id: UserId,
        next: BookingStatus,
    ) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        let state = self.fetch_state_for_update(&mut tx, booking_id).await?;
        if state.provider_id != provider_id {
            return Err(AppError::ForbiddenOperation);
        }
        let status = state.status()?;
        if !status.can_transition_to(next) {
            return Err(AppError::UnprocessableEntity(format!(
                "booking cannot move from {status} to {next}"
            )));
        }

        let res = sqlx::query("UPDATE bookings SET status = $1 WHERE booking_id = $2")
            .bind(next.to_string())
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::booking::is_available;
    use std::str::FromStr;

    use super::*;

    fn client_id() -> UserId {
        UserId::from_str("11111111-1111-1111-1111-111111111111").unwrap()
    }

    fn provider_id() -> UserId {
        UserId::from_str("22222222-2222-2222-2222-222222222222").unwrap()
    }

    fn other_provider_id() -> UserId {
        UserId::from_str("33333333-3333-3333-3333-333333333333").unwrap()
    }

    fn event_id(n: u8) -> kernel::model::id::EventId {
        let raw = format!("aaaaaaa{n}-aaaa-aaaa-aaaa-aaaaaaaaaaaa");
        kernel::model::id::EventId::from_str(&raw).unwrap()
    }

    #[sqlx::test(fixtures("common"))]
    async fn booking_lifecycle_matches_the_happy_path(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        let booking = repo.find_by_id(booking_id).await?.unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);

        repo.accept(AcceptBooking::new(booking_id, provider_id()))
            .await?;

        repo.confirm_payment(ConfirmPayment::new(
            booking_id,
            provider_id(),
            Decimal::from(5000),
        ))
        .await?;

        let payout = repo.pay_provider(PayProvider::new(booking_id)).await?;
        assert_eq!(payout, Decimal::from(4000));

        repo.complete(CompleteBooking::new(booking_id, provider_id()))
            .await?;

        let booking = repo.find_by_id(booking_id).await?.unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        assert_eq!(booking.payment_amount, Some(Decimal::from(5000)));
        assert_eq!(booking.provider_payment, Some(Decimal::from(4000)));
        assert_eq!(booking.provider_payment_status, PaymentStatus::Paid);
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn second_booking_for_same_pair_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        repo.accept(AcceptBooking::new(booking_id, provider_id()))
            .await?;

        // Rejected regardless of the existing booking's status.
        let res = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn declined_booking_cannot_be_accepted_later(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        repo.decline(DeclineBooking::new(booking_id, provider_id()))
            .await?;

        let booking = repo.find_by_id(booking_id).await?.unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);

        let res = repo.accept(AcceptBooking::new(booking_id, provider_id())).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn only_the_targeted_provider_may_respond(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;

        let res = repo
            .accept(AcceptBooking::new(booking_id, other_provider_id()))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn completing_before_payment_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        repo.accept(AcceptBooking::new(booking_id, provider_id()))
            .await?;

        let res = repo
            .complete(CompleteBooking::new(booking_id, provider_id()))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn payout_requires_recorded_payment_and_runs_once(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        repo.accept(AcceptBooking::new(booking_id, provider_id()))
            .await?;

        let res = repo.pay_provider(PayProvider::new(booking_id)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        repo.confirm_payment(ConfirmPayment::new(
            booking_id,
            provider_id(),
            Decimal::from(5000),
        ))
        .await?;
        repo.pay_provider(PayProvider::new(booking_id)).await?;

        // Re-running the payout must not recompute it.
        let res = repo.pay_provider(PayProvider::new(booking_id)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn non_positive_payment_amount_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;

        let res = repo
            .confirm_payment(ConfirmPayment::new(booking_id, provider_id(), Decimal::ZERO))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn availability_flips_at_three_confirmed_bookings(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let mut booking_ids = Vec::new();
        for n in 1..=3 {
            let booking_id = repo
                .create(CreateBooking::new(event_id(n), provider_id(), client_id()))
                .await?;
            repo.accept(AcceptBooking::new(booking_id, provider_id()))
                .await?;
            booking_ids.push(booking_id);
        }

        let count = repo.count_confirmed_by_provider(provider_id()).await?;
        assert_eq!(count, 3);
        assert!(!is_available(count));

        // One booking finishing frees a slot again.
        repo.confirm_payment(ConfirmPayment::new(
            booking_ids[0],
            provider_id(),
            Decimal::from(1000),
        ))
        .await?;
        repo.complete(CompleteBooking::new(booking_ids[0], provider_id()))
            .await?;

        let count = repo.count_confirmed_by_provider(provider_id()).await?;
        assert_eq!(count, 2);
        assert!(is_available(count));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn contact_gate_opens_on_confirmed_booking_only(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(!repo
            .client_has_confirmed_booking(client_id(), provider_id())
            .await?);

        let booking_id = repo
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        assert!(!repo
            .client_has_confirmed_booking(client_id(), provider_id())
            .await?);

        repo.accept(AcceptBooking::new(booking_id, provider_id()))
            .await?;
        assert!(repo
            .client_has_confirmed_booking(client_id(), provider_id())
            .await?);
        Ok(())
    }
}
