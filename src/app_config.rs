use rocket::serde::{Serialize, Deserialize};

fn default_counter_key() -> String {
  "1".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Config {
  /** 计数记录的固定主键，部署时一般无需改动 */
  #[serde(default = "default_counter_key")]
  pub counter_key: String,
}

#[cfg(test)]
mod tests {
  use super::Config;

  #[test]
  fn missing_keys_fall_back_to_defaults() {
    let config: Config = rocket::figment::Figment::new().extract().unwrap();
    assert_eq!(config.counter_key, "1");
  }
}
