pub mod arche_client;
