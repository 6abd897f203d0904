pub mod preview_service;
