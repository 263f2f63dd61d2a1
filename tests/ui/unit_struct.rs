use decima::FromMessage;

#[derive(FromMessage)]
struct NoArgsError;

fn main() {
    let _ = NoArgsError;
}
