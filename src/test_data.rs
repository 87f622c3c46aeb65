#[cfg(test)]
pub const FIRST_POST: &str = "# Hi

This is the __first__ post.

- one
- two
";

#[cfg(test)]
pub const SECOND_POST: &str = "# Hello again

This is the *second* post, with a [link](https://example.com).
";
