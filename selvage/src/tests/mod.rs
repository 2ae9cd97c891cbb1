// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "accesskit")]
mod test_focus;
mod utils;
