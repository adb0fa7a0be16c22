pub mod brand;
pub mod domain;
pub mod normalizer;
pub mod redirects;
pub mod scorer;
