use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod quarterbacks;
pub mod squads;
pub mod standings;

use crate::middleware::admin::AdminMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::root)
        .service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(standings::get_standings)
            .service(standings::get_worst_qb)
            .service(squads::get_all_squads)
            .service(squads::get_squad_roster)
            .service(quarterbacks::get_all_quarterbacks)
            .service(quarterbacks::get_quarterback_details)
            .service(
                web::scope("/admin")
                    .service(admin::verify_password)
                    // Everything below requires a valid admin token
                    .service(
                        web::scope("")
                            .wrap(AdminMiddleware)
                            .service(admin::add_weekly_stat)
                            .service(admin::add_season_bonus)
                            .service(admin::add_playoff_appearance)
                            .service(admin::sync_stats)
                            .service(admin::sync_wins)
                            .service(admin::sync_playoffs)
                            .service(admin::seed_awards),
                    ),
            ),
    );
}
