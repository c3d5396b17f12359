use notes_api::{Client, DEFAULT_BASE_URL, NotesApiError, Request};
use secrecy::SecretString;

#[tokio::main]
pub async fn main() -> Result<(), NotesApiError> {
    let client = Client::new(DEFAULT_BASE_URL);

    let req = Request::users().signin("you@example.com", "123456");
    let res = client.send(req).await?;
    println!("signed in as {}", res.data.user.full_name);

    let client = match res.data.token {
        Some(token) => Client::with_token(DEFAULT_BASE_URL, &SecretString::from(token)),
        None => client,
    };

    let notes = client.send(Request::notes().list()).await?;
    for note in notes.data {
        println!("{}  {}", note.id, note.title);
    }
    Ok(())
}
