use decima::FromMessage;

#[derive(FromMessage)]
struct IdAndMessageError {
    id: i32,
    message: String,
}

fn main() {
    let kind = IdAndMessageError {
        id: -1,
        message: String::new(),
    };
    let _ = (kind.id, kind.message);
}
