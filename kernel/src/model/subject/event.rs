use derive_new::new;

#[derive(Debug, new)]
pub struct CreateSubject {
    pub name: String,
}
