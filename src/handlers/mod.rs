pub mod artists;
pub mod artworks;
pub mod cities;
pub mod comments;
pub mod countries;
pub mod employees;
pub mod health;
pub mod movements;
pub mod museums;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artistas", artist_routes())
        // Museums answer under both spellings
        .nest("/Museos", museum_routes())
        .nest("/museos", museum_routes())
        .nest("/obras", artwork_routes())
        .nest("/movimientoartisticos", movement_routes())
        .nest("/paises", country_routes())
        .nest("/ciudades", city_routes())
        .nest("/empleados", employee_routes())
        .nest("/comentarios", comment_routes())
}

fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(artists::create_artist).get(artists::list_artists))
        .route(
            "/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        // Museums
        .route(
            "/:id/museos",
            get(artists::list_museums).put(artists::replace_museums),
        )
        .route(
            "/:id/museos/:museo_id",
            post(artists::add_museum)
                .get(artists::get_museum)
                .delete(artists::remove_museum),
        )
        // Movements
        .route(
            "/:id/movimientos",
            get(artists::list_movements).put(artists::replace_movements),
        )
        .route(
            "/:id/movimientos/:movimiento_id",
            post(artists::add_movement)
                .get(artists::get_movement)
                .delete(artists::remove_movement),
        )
        // Artworks
        .route(
            "/:id/obras",
            get(artists::list_artworks).put(artists::replace_artworks),
        )
        .route(
            "/:id/obras/:obra_id",
            post(artists::add_artwork)
                .get(artists::get_artwork)
                .delete(artists::remove_artwork),
        )
        // Countries
        .route("/:id/lugarNacimiento", put(artists::replace_birth_country))
        .route("/:id/lugarFallecimiento", put(artists::replace_death_country))
}

fn museum_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(museums::create_museum).get(museums::list_museums))
        .route(
            "/:id",
            get(museums::get_museum)
                .put(museums::update_museum)
                .delete(museums::delete_museum),
        )
        .route(
            "/:id/artistas",
            get(museums::list_artists).put(museums::replace_artists),
        )
        .route(
            "/:id/artistas/:artista_id",
            post(museums::add_artist)
                .get(museums::get_artist)
                .delete(museums::remove_artist),
        )
        .route(
            "/:id/movimientos",
            get(museums::list_movements).put(museums::replace_movements),
        )
        .route(
            "/:id/movimientos/:movimiento_id",
            post(museums::add_movement)
                .get(museums::get_movement)
                .delete(museums::remove_movement),
        )
        .route(
            "/:id/obras",
            get(museums::list_artworks).put(museums::replace_artworks),
        )
        .route(
            "/:id/obras/:obra_id",
            post(museums::add_artwork)
                .get(museums::get_artwork)
                .delete(museums::remove_artwork),
        )
        .route(
            "/:id/ubicacion",
            put(museums::replace_location).delete(museums::remove_location),
        )
}

fn artwork_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(artworks::create_artwork).get(artworks::list_artworks))
        .route(
            "/:id",
            get(artworks::get_artwork)
                .put(artworks::update_artwork)
                .delete(artworks::delete_artwork),
        )
        .route(
            "/:id/artistas/:artista_id",
            post(artworks::add_artist)
                .get(artworks::get_artist)
                .delete(artworks::remove_artist),
        )
        .route(
            "/:id/museos/:museo_id",
            post(artworks::add_museum)
                .get(artworks::get_museum)
                .delete(artworks::remove_museum),
        )
        .route(
            "/:id/movimientoartisticos/:movimiento_id",
            post(artworks::add_movement)
                .get(artworks::get_movement)
                .delete(artworks::remove_movement),
        )
}

fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(movements::create_movement).get(movements::list_movements))
        .route(
            "/:id",
            get(movements::get_movement)
                .put(movements::update_movement)
                .delete(movements::delete_movement),
        )
        .route(
            "/:id/artistas",
            get(movements::list_artists).put(movements::replace_artists),
        )
        .route(
            "/:id/artistas/:artista_id",
            post(movements::add_artist)
                .get(movements::get_artist)
                .delete(movements::remove_artist),
        )
        .route(
            "/:id/museos",
            get(movements::list_museums).put(movements::replace_museums),
        )
        .route(
            "/:id/museos/:museo_id",
            post(movements::add_museum)
                .get(movements::get_museum)
                .delete(movements::remove_museum),
        )
        .route(
            "/:id/obras",
            get(movements::list_artworks).put(movements::replace_artworks),
        )
        .route(
            "/:id/obras/:obra_id",
            post(movements::add_artwork)
                .get(movements::get_artwork)
                .delete(movements::remove_artwork),
        )
        .route(
            "/:id/lugarOrigen",
            put(movements::replace_origin_country).delete(movements::remove_origin_country),
        )
}

fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(countries::create_country).get(countries::list_countries))
        .route(
            "/:id",
            get(countries::get_country)
                .put(countries::update_country)
                .delete(countries::delete_country),
        )
}

fn city_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cities::create_city).get(cities::list_cities))
        .route(
            "/:id",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
        .route(
            "/:id/paises/:pais_id",
            post(cities::add_country)
                .get(cities::get_country)
                .delete(cities::remove_country),
        )
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(employees::create_employee).get(employees::list_employees))
        .route(
            "/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/:id/museo",
            put(employees::replace_museum).delete(employees::remove_museum),
        )
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(comments::create_comment).get(comments::list_comments))
        .route(
            "/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route(
            "/:id/obra",
            put(comments::replace_artwork).delete(comments::remove_artwork),
        )
}
