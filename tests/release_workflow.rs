//! End-to-end workflow tests against a real Postgres instance. Each test
//! runs in its own sqlx-managed database with the embedded migrations
//! applied. Ignored by default; run with a reachable `DATABASE_URL` via
//! `cargo test -- --ignored`.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use booster_core::constants::notification_kinds;
use booster_core::models::{
    AvailabilitySlot, Booking, BookingStatus, Booster, ClaimRequest, ClaimStatus, Job, JobStatus,
    NewAvailabilitySlot, NewBooking, NewBooster, Notification, SlotStatus,
};
use booster_core::orchestration::release_booking;
use booster_core::ReleaseError;

async fn seed_booster(
    pool: &PgPool,
    name: &str,
    location: Option<&str>,
    is_available: bool,
) -> Booster {
    Booster::create(
        pool,
        NewBooster {
            display_name: name.to_string(),
            location: location.map(str::to_string),
            specialties: vec!["makeup".to_string()],
            is_available,
        },
    )
    .await
    .unwrap()
}

async fn seed_assigned_booking(pool: &PgPool, booster: &Booster) -> Booking {
    Booking::create(
        pool,
        NewBooking {
            service_name: "Bryllupsmakeup".to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_hours: 3.0,
            location: "København, Danmark".to_string(),
            amount: 3000.0,
            status: BookingStatus::Assigned,
            assigned_booster_id: Some(booster.booster_id),
            customer_name: Some("Sofie Larsen".to_string()),
            customer_email: Some("sofie@example.com".to_string()),
            customer_phone: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_busy_slot(pool: &PgPool, booster: &Booster, booking: &Booking) -> AvailabilitySlot {
    AvailabilitySlot::create(
        pool,
        NewAvailabilitySlot {
            booster_id: booster.booster_id,
            slot_date: booking.scheduled_date,
            start_time: booking.scheduled_time,
            end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            status: SlotStatus::Busy,
            booking_id: Some(booking.booking_id),
        },
    )
    .await
    .unwrap()
}

async fn seed_admin(pool: &PgPool) -> Uuid {
    let admin_id = Uuid::new_v4();
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, 'admin')")
        .bind(admin_id)
        .execute(pool)
        .await
        .unwrap();
    admin_id
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn release_runs_the_full_reassignment_cycle(pool: PgPool) {
    let p1 = seed_booster(&pool, "Mia Jensen", Some("København"), true).await;
    let p2 = seed_booster(&pool, "Ida Holm", Some("København"), true).await;
    let _p3 = seed_booster(&pool, "Lene Steen", Some("København"), false).await;
    let booking = seed_assigned_booking(&pool, &p1).await;
    seed_busy_slot(&pool, &p1, &booking).await;
    let admin_id = seed_admin(&pool).await;

    let outcome = release_booking(&pool, booking.booking_id, p1.booster_id, Some("syg"))
        .await
        .unwrap();
    assert_eq!(outcome.notified_boosters, 1);

    // State invariant: unassigned, pending.
    let released = Booking::find_by_id(&pool, booking.booking_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(released.status, BookingStatus::PendingAssignment);
    assert_eq!(released.assigned_booster_id, None);

    // Slot cleanup: the busy calendar entry is gone.
    let slot = AvailabilitySlot::find_for_booking(&pool, p1.booster_id, booking.booking_id)
        .await
        .unwrap();
    assert!(slot.is_none());

    // Exactly one claim, for the sole eligible candidate, expiring in ~24h.
    let claims = ClaimRequest::list_for_booking(&pool, booking.booking_id)
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].booster_id, p2.booster_id);
    assert_eq!(claims[0].status, ClaimStatus::Pending);
    assert!(claims[0].expires_at > Utc::now() + Duration::hours(23));
    assert!(claims[0].expires_at <= Utc::now() + Duration::hours(24));

    // One notification for the candidate, one for the admin.
    let candidate_messages =
        Notification::list_for_recipient(&pool, p2.booster_id, notification_kinds::JOB_RELEASED)
            .await
            .unwrap();
    assert_eq!(candidate_messages.len(), 1);
    assert!(candidate_messages[0].body.contains("Bryllupsmakeup"));

    let admin_messages =
        Notification::list_for_recipient(&pool, admin_id, notification_kinds::JOB_RELEASED_ADMIN)
            .await
            .unwrap();
    assert_eq!(admin_messages.len(), 1);
    assert!(admin_messages[0].body.contains("Mia Jensen"));
    assert!(admin_messages[0].body.contains("syg"));

    // The job pool carries the projection with the computed hourly rate.
    let job = Job::find_by_booking_id(&pool, booking.booking_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(job.title, "Booking: Bryllupsmakeup");
    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(job.rate, 1000.0);
    assert_eq!(job.date_needed, booking.scheduled_date);
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn releasing_an_unknown_booking_performs_no_writes(pool: PgPool) {
    seed_admin(&pool).await;

    let error = release_booking(&pool, Uuid::new_v4(), Uuid::new_v4(), None)
        .await
        .unwrap_err();
    assert!(matches!(error, ReleaseError::BookingNotFound(_)));

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(&pool)
        .await
        .unwrap();
    let notifications: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(jobs, 0);
    assert_eq!(notifications, 0);
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn double_release_is_rejected_and_never_duplicates_the_job(pool: PgPool) {
    let p1 = seed_booster(&pool, "Mia Jensen", Some("København"), true).await;
    let _p2 = seed_booster(&pool, "Ida Holm", Some("København"), true).await;
    let booking = seed_assigned_booking(&pool, &p1).await;
    seed_busy_slot(&pool, &p1, &booking).await;

    release_booking(&pool, booking.booking_id, p1.booster_id, None)
        .await
        .unwrap();

    // The optimistic guard rejects a second release of an unassigned booking.
    let error = release_booking(&pool, booking.booking_id, p1.booster_id, None)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ReleaseError::NotAssignedToBooster { .. }
    ));

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE title = $1")
        .bind("Booking: Bryllupsmakeup")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(jobs, 1);
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn releaser_is_never_a_candidate_even_when_available(pool: PgPool) {
    // The releasing booster stays flagged available; she must still be
    // excluded from her own booking's candidate set.
    let p1 = seed_booster(&pool, "Mia Jensen", Some("København"), true).await;
    let booking = seed_assigned_booking(&pool, &p1).await;

    let outcome = release_booking(&pool, booking.booking_id, p1.booster_id, None)
        .await
        .unwrap();
    assert_eq!(outcome.notified_boosters, 0);

    let claims = ClaimRequest::list_for_booking(&pool, booking.booking_id)
        .await
        .unwrap();
    assert!(claims.is_empty());
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn claim_fanout_is_bounded(pool: PgPool) {
    let p1 = seed_booster(&pool, "Mia Jensen", Some("København"), true).await;
    for i in 0..8 {
        seed_booster(&pool, &format!("Booster {i}"), Some("København"), true).await;
    }
    let booking = seed_assigned_booking(&pool, &p1).await;

    let outcome = release_booking(&pool, booking.booking_id, p1.booster_id, None)
        .await
        .unwrap();
    assert_eq!(outcome.notified_boosters, 8);

    let claims = ClaimRequest::list_for_booking(&pool, booking.booking_id)
        .await
        .unwrap();
    assert_eq!(claims.len(), 5);
}

#[ignore = "requires a local Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn store_rejects_a_second_accepted_claim(pool: PgPool) {
    let p1 = seed_booster(&pool, "Mia Jensen", Some("København"), true).await;
    let p2 = seed_booster(&pool, "Ida Holm", Some("København"), true).await;
    let p3 = seed_booster(&pool, "Lene Steen", Some("København"), true).await;
    let booking = seed_assigned_booking(&pool, &p1).await;

    let expires_at = Utc::now() + Duration::hours(24);
    ClaimRequest::create(&pool, booking.booking_id, p2.booster_id, expires_at)
        .await
        .unwrap();
    ClaimRequest::create(&pool, booking.booking_id, p3.booster_id, expires_at)
        .await
        .unwrap();

    let accept = |booster_id: Uuid| {
        sqlx::query("UPDATE claim_requests SET status = 'accepted' WHERE booking_id = $1 AND booster_id = $2")
            .bind(booking.booking_id)
            .bind(booster_id)
            .execute(&pool)
    };

    accept(p2.booster_id).await.unwrap();
    let second = accept(p3.booster_id).await;
    assert!(second.is_err(), "exclusivity index must reject the sibling");
}
