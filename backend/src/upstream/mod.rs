pub mod poster_service;
