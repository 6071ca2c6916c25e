pub mod routes;

pub use routes::{use_navigation, AppRoutes, Navigation, ROUTE_BILLS, ROUTE_LOGIN, ROUTE_NEW_BILL};
