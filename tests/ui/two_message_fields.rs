use decima::FromMessage;

#[derive(FromMessage)]
struct Ambiguous {
    #[message]
    summary: String,
    #[message]
    detail: String,
}

fn main() {
    let kind = Ambiguous {
        summary: String::new(),
        detail: String::new(),
    };
    let _ = (kind.summary, kind.detail);
}
