pub mod geoip;
pub mod open_meteo;
