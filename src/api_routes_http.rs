use actix_web::web;
use scribe_api::{local_user::login::login, person::follow::follow_person};
use scribe_api_crud::{
  comment::create::create_comment,
  group::{
    create::create_group,
    delete::delete_group,
    list::list_groups,
    read::get_group,
    update::update_group,
  },
  post::{create::create_post, list::list_posts, read::get_post, update::update_post},
  user::{create::register, read::get_profile},
};

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Post
      .service(
        web::scope("/post")
          .route("", web::post().to(create_post))
          .route("", web::get().to(get_post))
          .route("", web::put().to(update_post))
          .route("/list", web::get().to(list_posts)),
      )
      // Comment
      .service(web::scope("/comment").route("", web::post().to(create_comment)))
      // Group
      .service(
        web::scope("/group")
          .route("", web::get().to(get_group))
          .route("", web::post().to(create_group))
          .route("", web::put().to(update_group))
          .route("/delete", web::post().to(delete_group))
          .route("/list", web::get().to(list_groups)),
      )
      // User
      .service(
        web::scope("/user")
          .route("", web::get().to(get_profile))
          .route("/register", web::post().to(register))
          .route("/login", web::post().to(login))
          .route("/follow", web::post().to(follow_person)),
      ),
  );
}
