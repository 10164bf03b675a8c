//! Server-rendered HTML for the three pages the service shows. The vote
//! form and the already-voted notice are fixed; the result page
//! interpolates tally values.

use crate::store::Tally;

pub const VOTE_PAGE: &str = include_str!("../assets/vote.html");

pub const ALREADY_VOTED_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Already voted</title>
  </head>
  <body>
    <h1>You have already voted!</h1>
    <p>Duplicate votes are not allowed.</p>
    <a href="/result">View results</a>
  </body>
</html>"#;

pub fn result_page(tally: &Tally) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Poll results</title>
  </head>
  <body>
    <h1>Poll results</h1>
    <div class="result">
      <div class="vote-count">🍜 Jjajangmyeon: <strong>{jjajangmyeon}</strong> votes</div>
      <div class="vote-count">🍲 Jjamppong: <strong>{jjamppong}</strong> votes</div>
      <div class="total">Total votes: {total}</div>
    </div>
    <a href="/vote">Vote again</a>
  </body>
</html>"#,
        jjajangmyeon = tally.jjajangmyeon,
        jjamppong = tally.jjamppong,
        total = tally.total(),
    )
}
