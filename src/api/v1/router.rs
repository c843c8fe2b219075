use super::handler;
use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let days_until_birthday = warp::get()
        .and(warp::path("hello"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(with(server.birthday_service.clone()))
        .and_then(handler::days_until_birthday);

    let record_date_of_birth = warp::put()
        .and(warp::path("hello"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with(server.birthday_service.clone()))
        .and_then(handler::record_date_of_birth);

    let health = warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .and_then(handler::health);

    days_until_birthday.or(record_date_of_birth).or(health)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}
