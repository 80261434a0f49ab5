pub mod validation;

use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub fn generate_random_string() -> String {
  thread_rng()
    .sample_iter(&Alphanumeric)
    .map(char::from)
    .take(30)
    .collect()
}
