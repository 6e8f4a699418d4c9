use rocket::http::{ContentType, Status};
use rocket::serde::json;
use rocket::{response, Request, Response, State};
use rocket_db_pools::Connection;

use crate::app_config::Config;
use crate::utils::storage::{self, CounterDB};

/** 计数响应：要么带回新的计数值，要么是一个不暴露内部细节的通用错误 */
#[derive(Debug)]
pub struct CountResponse {
  status: Status,
  body: String,
}

impl CountResponse {
  fn bumped(count: i64) -> Self {
    CountResponse {
      status: Status::Ok,
      body: json::json!({ "count": count }).to_string(),
    }
  }

  fn internal_error() -> Self {
    CountResponse {
      status: Status::InternalServerError,
      body: json::json!({ "message": "Internal Server Error" }).to_string(),
    }
  }
}

impl<'r> response::Responder<'r, 'static> for CountResponse {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    Response::build_from(self.body.respond_to(req)?)
        .status(self.status)
        .header(ContentType::JSON)
        .ok()
  }
}

#[get("/count")]
pub async fn bump_count(mut db: Connection<CounterDB>, config: &State<Config>) -> CountResponse {
  // 请求内容不参与计数，任何触发都只做一次原子递增
  match storage::bump_count(&mut db, &config.counter_key).await {
    Ok(count) => CountResponse::bumped(count),
    Err(err) => {
      // 失败只记日志，给调用方的响应不携带内部错误信息
      log::error!("failed to update visit counter: {}", err);
      CountResponse::internal_error()
    }
  }
}

#[options("/count")]
pub async fn count_cors() -> Status {
  Status::Ok
}
