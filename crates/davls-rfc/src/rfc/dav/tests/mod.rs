//! Multistatus fixtures and listing tests.
//!
//! Fixtures follow RFC 4918 §9.1 examples and the response shapes of
//! common servers (Apache `mod_dav`, nginx, Nextcloud).
