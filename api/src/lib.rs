// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: database pool, migrations and the sqlx repository
// - presentation: HTTP handlers and routing
// - application: repository port and user use cases
// - domain: the user entity and its validation rules

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
