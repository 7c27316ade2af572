/// Something that reacts to a stream of commands, one at a time
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
