// Resume download: a placeholder text file written to scratch space per
// request and removed once the response body is done with it.

pub mod handlers;
pub mod scratch;
