//! Transfer objects exchanged at the HTTP boundary and the pure mapping
//! between them and the entities. JSON field names are camelCase.
//!
//! Payload `validate()` methods are called by the boundary layer before a
//! repository is invoked; the mapping itself never validates.

pub mod hms;
pub mod customers;
pub mod orders;
pub mod service_types;
pub mod users;

pub use customers::{customer_response, CreateCustomer, CustomerResponse, UpdateCustomer};
pub use orders::{order_response, CreateOrder, OrderResponse, UpdateOrder};
pub use service_types::{service_type_response, CreateServiceType, ServiceTypeResponse, UpdateServiceType};
pub use users::{user_response, CreateUser, UpdateUser, UserResponse};
