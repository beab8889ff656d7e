// ABOUTME: API module containing the HTTP handler functions for the itemd REST API.
// ABOUTME: Item CRUD lives in the items sub-module.

pub mod items;
