mod connect;

pub use connect::ConnectUseCase;
