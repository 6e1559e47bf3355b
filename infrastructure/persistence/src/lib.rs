pub mod cart {
    pub mod record;
    pub mod store;
}
