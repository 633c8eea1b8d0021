pub mod appointment_request;

pub use appointment_request::{
    AppointmentListQuery, AvailableProvidersQuery, CreateAppointmentRequest, UpdateStatusRequest,
};
