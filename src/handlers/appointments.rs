//! Appointment HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/appointments` | 예약 생성 | 201 Created |
//! | `GET` | `/appointments/user?status=` | 내 예약 목록 | 200 OK |
//! | `GET` | `/appointments/provider?status=` | 내 작업 목록 (서비스 제공자) | 200 OK |
//! | `PATCH` | `/appointments/{id}/status` | 상태 변경 | 200 OK |
//! | `GET` | `/appointments/available-providers?date=&service=` | 예약 가능한 서비스 제공자 | 200 OK |

use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::{
            appointments::{
                request::{AppointmentListQuery, AvailableProvidersQuery, CreateAppointmentRequest, UpdateStatusRequest},
                response::AppointmentResponse,
            },
            users::response::UserResponse,
        },
        entities::appointments::Appointment,
        models::auth::AuthenticatedUser,
    },
    handlers::service,
    services::booking::{BookingService, NewBooking, Participant},
    utils::date_utils::parse_calendar_date,
};

fn to_responses(appointments: Vec<Appointment>) -> Vec<AppointmentResponse> {
    appointments.into_iter().map(AppointmentResponse::from).collect()
}

#[post("")]
pub async fn create_appointment(
    user: AuthenticatedUser,
    payload: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let booking = NewBooking {
        provider_id: request.provider_id,
        service: request.service,
        date: parse_calendar_date(&request.date)?,
        time: request.time,
        notes: request.notes,
        location: request.location,
        latitude: request.latitude,
        longitude: request.longitude,
    };

    let appointment = service::<BookingService>()?
        .create_booking(&user.user_id, booking)
        .await?;

    Ok(HttpResponse::Created().json(AppointmentResponse::from(appointment)))
}

#[get("/user")]
pub async fn list_my_bookings(
    user: AuthenticatedUser,
    query: web::Query<AppointmentListQuery>,
) -> Result<HttpResponse, AppError> {
    let appointments = service::<BookingService>()?
        .list_appointments(&user.user_id, Participant::Client, query.status.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(to_responses(appointments)))
}

#[get("")]
pub async fn list_my_jobs(
    user: AuthenticatedUser,
    query: web::Query<AppointmentListQuery>,
) -> Result<HttpResponse, AppError> {
    let appointments = service::<BookingService>()?
        .list_appointments(&user.user_id, Participant::Provider, query.status.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(to_responses(appointments)))
}

#[patch("/{appointment_id}/status")]
pub async fn update_status(
    user: AuthenticatedUser,
    appointment_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let appointment = service::<BookingService>()?
        .transition_status(&user.user_id, &appointment_id, &payload.status)
        .await?;

    Ok(HttpResponse::Ok().json(AppointmentResponse::from(appointment)))
}

/// 인증 없이 조회할 수 있습니다. `service`는 필수지만 필터링에는 쓰이지 않습니다.
#[get("/available-providers")]
pub async fn available_providers(
    query: web::Query<AvailableProvidersQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let query = query.into_inner();
    let date = parse_calendar_date(query.date.as_deref().unwrap_or_default())?;
    let service_name = query.service.unwrap_or_default();

    let providers = service::<BookingService>()?
        .find_available_providers(date, &service_name)
        .await?;

    let response: Vec<UserResponse> = providers.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
