use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        device::{DeviceModeDto, SetDeviceModeDto},
    },
    server::{error::AppError, service::device_mode::DeviceModeService, state::AppState},
};

/// Tag for grouping device mode endpoints in OpenAPI documentation
pub static DEVICE_MODE_TAG: &str = "device-mode";

#[derive(Deserialize)]
pub struct DeviceModeParams {
    pub device: Option<String>,
}

/// Get the current mode of the fingerprint device.
///
/// Open to unauthenticated callers; the device polls this endpoint.
///
/// # Returns
/// - `200 OK` - `{mode, member_id}`
/// - `404 Not Found` - No mode set, or it expired
#[utoipa::path(
    get,
    path = "/api/device-mode",
    tag = DEVICE_MODE_TAG,
    params(
        ("device" = Option<String>, Query, description = "Device key (default: `default`)")
    ),
    responses(
        (status = 200, description = "Current device mode", body = DeviceModeDto),
        (status = 404, description = "No device mode set", body = ErrorDto)
    ),
)]
pub async fn get_device_mode(
    State(state): State<AppState>,
    query: Result<Query<DeviceModeParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;

    let Some(current) = state.device_mode.get(params.device.as_deref()).await else {
        return Err(AppError::NotFound("No device mode set".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(DeviceModeDto {
            mode: current.mode.to_string(),
            member_id: current.member_id,
        }),
    ))
}

/// Set the mode of the fingerprint device.
///
/// Replaces any previous mode of the same device and restarts its expiry.
///
/// # Returns
/// - `200 OK` - Mode stored
/// - `400 Bad Request` - Mode missing or not `register`/`attendance`, or device key too long
#[utoipa::path(
    post,
    path = "/api/device-mode",
    tag = DEVICE_MODE_TAG,
    request_body = SetDeviceModeDto,
    responses(
        (status = 200, description = "Mode stored", body = MessageDto),
        (status = 400, description = "Invalid mode", body = ErrorDto)
    ),
)]
pub async fn set_device_mode(
    State(state): State<AppState>,
    payload: Result<Json<SetDeviceModeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let mode = DeviceModeService::parse_mode(payload.mode.as_deref())?;

    state
        .device_mode
        .set(payload.device.as_deref(), mode, payload.member_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Mode has been updated.".to_string(),
        }),
    ))
}
