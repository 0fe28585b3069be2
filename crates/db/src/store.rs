//! # Booking Store
//!
//! The storage boundary the HTTP layer talks to. Every method maps rows to
//! core models so handlers never see `Db*` types.
//!
//! Reads return freshly committed state on every call; nothing is cached.
//! The only write that races with other bookings, `create_appointment`, is
//! guarded by the `appointments_no_overlap` exclusion constraint.

use async_trait::async_trait;
use chrono::{DateTime, Utc, Weekday};
use eyre::Result;
use mockall::automock;
use slotbook_core::models::{
    appointment::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointment},
    business::{
        BreakTime, BusinessSettings, CreateBreakTimeRequest, UpdateBusinessSettingsRequest,
        UpdateWorkingHoursRequest, WorkingHours, weekday_index,
    },
    service::{CreateServiceRequest, Service, UpdateServiceRequest},
};
use uuid::Uuid;

use crate::{DbPool, models::convert_all, repositories};

#[automock]
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn working_hours_for_day(&self, day: Weekday) -> Result<Option<WorkingHours>>;
    async fn list_working_hours(&self) -> Result<Vec<WorkingHours>>;
    async fn update_working_hours(
        &self,
        id: Uuid,
        request: &UpdateWorkingHoursRequest,
    ) -> Result<Option<WorkingHours>>;

    async fn break_times_for_day(&self, day: Weekday) -> Result<Vec<BreakTime>>;
    async fn list_break_times(&self) -> Result<Vec<BreakTime>>;
    async fn create_break_time(&self, request: &CreateBreakTimeRequest) -> Result<BreakTime>;
    async fn delete_break_time(&self, id: Uuid) -> Result<bool>;

    async fn business_settings(&self) -> Result<Option<BusinessSettings>>;
    async fn update_business_settings(
        &self,
        request: &UpdateBusinessSettingsRequest,
    ) -> Result<Option<BusinessSettings>>;

    async fn get_service(&self, id: Uuid) -> Result<Option<Service>>;
    async fn list_services(&self, active_only: bool) -> Result<Vec<Service>>;
    async fn create_service(&self, request: &CreateServiceRequest) -> Result<Service>;
    async fn update_service(
        &self,
        id: Uuid,
        request: &UpdateServiceRequest,
    ) -> Result<Option<Service>>;

    /// Pending and approved appointments overlapping `[start, end)`.
    async fn active_appointments_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Appointment>>;
    /// `Ok(None)` when storage refused the window because it overlaps a
    /// held appointment.
    async fn create_appointment(&self, new: &NewAppointment) -> Result<Option<Appointment>>;
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>>;
    async fn list_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>>;
    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        admin_note: Option<String>,
    ) -> Result<Option<Appointment>>;
    async fn delete_appointment(&self, id: Uuid) -> Result<bool>;
}

/// [`BookingStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn working_hours_for_day(&self, day: Weekday) -> Result<Option<WorkingHours>> {
        repositories::working_hours::get_working_hours_by_day(&self.pool, weekday_index(day))
            .await?
            .map(WorkingHours::try_from)
            .transpose()
    }

    async fn list_working_hours(&self) -> Result<Vec<WorkingHours>> {
        convert_all(repositories::working_hours::list_working_hours(&self.pool).await?)
    }

    async fn update_working_hours(
        &self,
        id: Uuid,
        request: &UpdateWorkingHoursRequest,
    ) -> Result<Option<WorkingHours>> {
        repositories::working_hours::update_working_hours(&self.pool, id, request)
            .await?
            .map(WorkingHours::try_from)
            .transpose()
    }

    async fn break_times_for_day(&self, day: Weekday) -> Result<Vec<BreakTime>> {
        convert_all(
            repositories::break_time::get_break_times_by_day(&self.pool, weekday_index(day))
                .await?,
        )
    }

    async fn list_break_times(&self) -> Result<Vec<BreakTime>> {
        convert_all(repositories::break_time::list_break_times(&self.pool).await?)
    }

    async fn create_break_time(&self, request: &CreateBreakTimeRequest) -> Result<BreakTime> {
        repositories::break_time::create_break_time(&self.pool, request)
            .await?
            .try_into()
    }

    async fn delete_break_time(&self, id: Uuid) -> Result<bool> {
        repositories::break_time::delete_break_time(&self.pool, id).await
    }

    async fn business_settings(&self) -> Result<Option<BusinessSettings>> {
        Ok(repositories::settings::get_business_settings(&self.pool)
            .await?
            .map(BusinessSettings::from))
    }

    async fn update_business_settings(
        &self,
        request: &UpdateBusinessSettingsRequest,
    ) -> Result<Option<BusinessSettings>> {
        Ok(repositories::settings::update_business_settings(&self.pool, request)
            .await?
            .map(BusinessSettings::from))
    }

    async fn get_service(&self, id: Uuid) -> Result<Option<Service>> {
        Ok(repositories::service::get_service_by_id(&self.pool, id)
            .await?
            .map(Service::from))
    }

    async fn list_services(&self, active_only: bool) -> Result<Vec<Service>> {
        Ok(repositories::service::list_services(&self.pool, active_only)
            .await?
            .into_iter()
            .map(Service::from)
            .collect())
    }

    async fn create_service(&self, request: &CreateServiceRequest) -> Result<Service> {
        Ok(repositories::service::create_service(&self.pool, request)
            .await?
            .into())
    }

    async fn update_service(
        &self,
        id: Uuid,
        request: &UpdateServiceRequest,
    ) -> Result<Option<Service>> {
        Ok(repositories::service::update_service(&self.pool, id, request)
            .await?
            .map(Service::from))
    }

    async fn active_appointments_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Appointment>> {
        convert_all(
            repositories::appointment::get_active_appointments_overlapping(&self.pool, start, end)
                .await?,
        )
    }

    async fn create_appointment(&self, new: &NewAppointment) -> Result<Option<Appointment>> {
        repositories::appointment::create_appointment(&self.pool, new)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        repositories::appointment::get_appointment_by_id(&self.pool, id)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn list_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>> {
        convert_all(repositories::appointment::list_appointments(&self.pool, filter).await?)
    }

    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        admin_note: Option<String>,
    ) -> Result<Option<Appointment>> {
        repositories::appointment::update_appointment_status(
            &self.pool,
            id,
            status,
            admin_note.as_deref(),
        )
        .await?
        .map(Appointment::try_from)
        .transpose()
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        repositories::appointment::delete_appointment(&self.pool, id).await
    }
}
