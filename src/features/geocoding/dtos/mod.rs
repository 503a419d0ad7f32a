mod geocode_dto;

pub use geocode_dto::{GeocodeQuery, LocationResponseDto};
