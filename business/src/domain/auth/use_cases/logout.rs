pub trait LogoutUseCase: Send + Sync {
    fn execute(&self);
}
