pub mod auth {
    pub mod model;
    pub mod slice;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod user {
    pub mod schema;
    pub mod model;
    pub mod slice;
    pub mod repository;
    pub mod repository_http;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod chat {
    pub mod schema;
    pub mod model;
    pub mod slice;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod notification {
    pub mod schema;
    pub mod model;
    pub mod slice;
    pub mod panel;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod friend {
    pub mod schema;
    pub mod model;
    pub mod slice;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod navigation {
    pub mod model;
    pub mod service;
    pub mod handle;
    pub mod route;
}

pub mod file_upload;
pub mod websocket;
