/*
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

use rocket::fairing::AdHoc;
use rocket_db_pools::{sqlx, Connection, Database};

/** 数据库连接池 */
#[derive(Database)]
#[database("hit_count")]
pub struct CounterDB(sqlx::SqlitePool);

/** 计数器表名，整个服务只有这一张表、一条记录 */
const COUNTER_TABLE: &str = "visit_counter";

#[derive(sqlx::FromRow, Debug)]
/** 计数器模型 */
pub struct CounterRow {
  pub count: i64,
}

/** 创建计数器表（启动时执行一次，请求路径上不再做建表检查） */
pub async fn create_counter_table(db: &sqlx::SqlitePool) -> Result<(), sqlx::Error> {
  sqlx::query(
  &format!(r#"
    CREATE TABLE IF NOT EXISTS {} (
      id TEXT PRIMARY KEY,
      count INTEGER NOT NULL DEFAULT 0
    )
    "#,
    COUNTER_TABLE
  ))
  .execute(db)
  .await?;
  Ok(())
}

/** 启动阶段初始化存储，失败则中止启动 */
pub fn stage() -> AdHoc {
  AdHoc::try_on_ignite("Counter schema", |rocket| async {
    let Some(db) = CounterDB::fetch(&rocket) else {
      return Err(rocket);
    };
    if let Err(err) = create_counter_table(&db.0).await {
      log::error!("failed to create counter table: {}", err);
      return Err(rocket);
    }
    Ok(rocket)
  })
}

/**
 * 原子递增计数器并返回新值。
 *
 * 记录不存在时从 0 初始化再加 1。整个更新在数据库里以一条
 * upsert 语句完成，并发请求不会丢失任何一次递增；在处理端
 * 先读后写会引入丢失更新，禁止那样实现。
 */
pub async fn bump_count(db: &mut Connection<CounterDB>, key: &str) -> Result<i64, sqlx::Error> {
  let row = sqlx::query_as::<_, CounterRow>(
    &format!(
        r#"
        INSERT INTO {} (id, count) VALUES ($1, 1)
        ON CONFLICT (id) DO UPDATE SET count = count + 1
        RETURNING count
        "#,
        COUNTER_TABLE
      )
    )
    .bind(key)
    .fetch_one(db.as_mut())
    .await?;

  Ok(row.count)
}
