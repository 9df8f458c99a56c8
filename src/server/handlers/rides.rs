use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::server::DynEngine;
use crate::usecase::{
    AcceptRideInput, FinishRideOutput, GetRideOutput, RequestRideInput, RequestRideOutput,
    UpdatePositionInput,
};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptParams {
    driver_id: Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct PositionParams {
    lat: f64,
    long: f64,
}

pub async fn request(
    Extension(engine): Extension<DynEngine>,
    Json(params): Json<RequestRideInput>,
) -> Result<Json<RequestRideOutput>, Error> {
    let output = engine.request_ride.execute(params).await?;

    Ok(output.into())
}

pub async fn find(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRideOutput>, Error> {
    let ride = engine.get_ride.execute(id).await?;

    Ok(ride.into())
}

pub async fn accept(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
    Json(params): Json<AcceptParams>,
) -> Result<Json<GetRideOutput>, Error> {
    let input = AcceptRideInput {
        ride_id: id,
        driver_id: params.driver_id,
    };
    engine.accept_ride.execute(input).await?;

    Ok(engine.get_ride.execute(id).await?.into())
}

pub async fn start(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRideOutput>, Error> {
    engine.start_ride.execute(id).await?;

    Ok(engine.get_ride.execute(id).await?.into())
}

pub async fn update_position(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
    Json(params): Json<PositionParams>,
) -> Result<StatusCode, Error> {
    let input = UpdatePositionInput {
        ride_id: id,
        lat: params.lat,
        long: params.long,
        date: Utc::now(),
    };
    engine.update_position.execute(input).await?;

    Ok(StatusCode::CREATED)
}

pub async fn finish(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
) -> Result<Json<FinishRideOutput>, Error> {
    let output = engine.finish_ride.execute(id).await?;

    Ok(output.into())
}

pub async fn cancel(
    Extension(engine): Extension<DynEngine>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRideOutput>, Error> {
    engine.cancel_ride.execute(id).await?;

    Ok(engine.get_ride.execute(id).await?.into())
}
