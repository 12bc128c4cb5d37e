mod claims;

pub use claims::VerifiedClaims;
