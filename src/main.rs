#[tokio::main]
async fn main() {
    noodle_vote::start_server().await;
}
