/**
 * Copyright 2025-present hitcount authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket_db_pools::Database;

use hitcount::app_config::Config;
use hitcount::routes::count;
use hitcount::utils::cors::CORS;
use hitcount::utils::storage::{self, CounterDB};

#[launch]
async fn rocket() -> _ {
  rocket::build()
    .attach(CORS)
    .attach(CounterDB::init())
    .attach(storage::stage())
    .attach(AdHoc::config::<Config>())
    .mount("/", routes![count::bump_count, count::count_cors])
}
