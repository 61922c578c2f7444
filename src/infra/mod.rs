pub mod db;
pub mod locales;
