mod contact_endpoint;

pub use contact_endpoint::{
    ContactEndpoint, ContactPayload, EndpointError, GENERIC_REJECTION, TRANSPORT_FAILURE,
};
