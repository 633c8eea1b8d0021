pub mod appointment_response;

pub use appointment_response::AppointmentResponse;
