
#[macro_export]
macro_rules! attrs {
  () => {
    $crate::model::Attributes::new()
  };

  ($($key:expr => $value:expr),+ $(,)?) => {
    <$crate::model::Attributes as ::std::iter::FromIterator<_>>::from_iter([
      $((::std::string::String::from($key), $crate::model::Value::from($value)),)+
    ])
  };
}

#[macro_export]
macro_rules! nodes {
  ($($child:expr),* $(,)?) => {
    ::std::vec![$($crate::model::Node::from($child)),*]
  };
}
