use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{
        event::{CancelEvent, CompleteEvent, CreateEvent},
        Event,
    },
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        sqlx::query(
            r#"
                INSERT INTO events (event_id, title, date, location, client_id)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event_id)
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.location)
        .bind(event.client_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(event_id)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
                SELECT event_id, title, date, location, client_id
                FROM events
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    async fn find_by_client(&self, client_id: UserId) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
                SELECT event_id, title, date, location, client_id
                FROM events
                WHERE client_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(client_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn cancel(&self, event: CancelEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.event_id, event.requested_user)
            .await?;

        // Every booking of the event is force-set to cancelled whatever
        // its prior state; the rows survive the event row's deletion
        // (event_id is nulled by the foreign key).
        sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE event_id = $1")
            .bind(event.event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event.event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no event record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)
    }

    async fn complete(&self, event: CompleteEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.event_id, event.requested_user)
            .await?;

        // Only bookings whose payment has been recorded may finish;
        // unpaid confirmed bookings are deliberately left untouched.
        sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'completed'
                WHERE event_id = $1
                  AND status = 'confirmed'
                  AND payment_status = 'paid'
            "#,
        )
        .bind(event.event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)
    }
}

impl EventRepositoryImpl {
    async fn check_ownership(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event_id: EventId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let client_id: Option<UserId> = sqlx::query_scalar(
            "SELECT client_id FROM events WHERE event_id = $1 FOR UPDATE",
        )
        .bind(event_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(client_id) = client_id else {
            return Err(AppError::EntityNotFound(format!(
                "event ({event_id}) not found"
            )));
        };
        if client_id != requested_user {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use kernel::model::booking::{
        event::{AcceptBooking, ConfirmPayment, CreateBooking},
        BookingStatus,
    };
    use kernel::repository::booking::BookingRepository;
    use rust_decimal::Decimal;

    use crate::repository::booking::BookingRepositoryImpl;

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

    fn event_id(n: u8) -> EventId {
        let raw = format!("aaaaaaa{n}-aaaa-aaaa-aaaa-aaaaaaaaaaaa");
        EventId::from_str(&raw).unwrap()
    }

    #[sqlx::test(fixtures("common"))]
    async fn create_and_list_client_events(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateEvent::new(
                "Mariage".into(),
                "2026-06-20".into(),
                "Alger".into(),
                client_id(),
            ))
            .await?;

        let events = repo.find_by_client(client_id()).await?;
        assert!(events.iter().any(|e| e.event_id == created));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn cancelling_an_event_cancels_all_bookings_and_removes_it(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let events = EventRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let bookings = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        // One pending, one confirmed booking on the same event.
        let pending = bookings
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        let confirmed = bookings
            .create(CreateBooking::new(
                event_id(1),
                other_provider_id(),
                client_id(),
            ))
            .await?;
        bookings
            .accept(AcceptBooking::new(confirmed, other_provider_id()))
            .await?;

        events
            .cancel(CancelEvent::new(event_id(1), client_id()))
            .await?;

        assert!(events.find_by_id(event_id(1)).await?.is_none());
        for booking_id in [pending, confirmed] {
            let booking = bookings.find_by_id(booking_id).await?.unwrap();
            assert_eq!(booking.status, BookingStatus::Cancelled);
            assert!(booking.event.is_none());
        }
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn completing_an_event_skips_unpaid_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let events = EventRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let bookings = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let paid = bookings
            .create(CreateBooking::new(event_id(1), provider_id(), client_id()))
            .await?;
        bookings.accept(AcceptBooking::new(paid, provider_id())).await?;
        bookings
            .confirm_payment(ConfirmPayment::new(paid, provider_id(), Decimal::from(3000)))
            .await?;

        let unpaid = bookings
            .create(CreateBooking::new(
                event_id(1),
                other_provider_id(),
                client_id(),
            ))
            .await?;
        bookings
            .accept(AcceptBooking::new(unpaid, other_provider_id()))
            .await?;

        events
            .complete(CompleteEvent::new(event_id(1), client_id()))
            .await?;

        let paid = bookings.find_by_id(paid).await?.unwrap();
        assert_eq!(paid.status, BookingStatus::Completed);
        let unpaid = bookings.find_by_id(unpaid).await?.unwrap();
        assert_eq!(unpaid.status, BookingStatus::Confirmed);
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn only_the_owner_may_cancel(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .cancel(CancelEvent::new(event_id(1), provider_id()))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
        Ok(())
    }
}
