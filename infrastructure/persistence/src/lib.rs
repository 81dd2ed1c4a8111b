pub mod errors;
pub mod file_store;
pub mod memory_store;
pub mod store;
mod product_id;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod coupon {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
