// Copyright 2025 the xenguide authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The authored curriculum. The first five steps of the hundred-step path
//! are fully written out; the rest of the path exists as phase metadata in
//! the `phases` module.

use crate::types::difficulty::Difficulty;
use crate::types::step::LearningStep;
use crate::types::step::StepContent;

pub fn learning_steps() -> &'static [LearningStep] {
    &LEARNING_STEPS
}

pub fn step_by_id(id: u32) -> Option<&'static LearningStep> {
    LEARNING_STEPS.iter().find(|step| step.id == id)
}

const LEARNING_STEPS: [LearningStep; 5] = [
    LearningStep {
        id: 1,
        title: "Understanding Virtualization Fundamentals",
        phase: "Getting Started",
        difficulty: Difficulty::Beginner,
        estimated_time: "30 minutes",
        description: "Learn what virtualization is, why it matters, and how it revolutionized computing.",
        objectives: &[
            "Define virtualization and its core concepts",
            "Understand the difference between physical and virtual machines",
            "Learn about hypervisors and their role",
            "Explore benefits: resource optimization, isolation, migration",
        ],
        content: StepContent {
            theory: r#"Virtualization creates a virtual version of computing resources like operating systems, servers, or networks. Originally developed by IBM in the 1960s with Jim Rymarczyk's CP-67 software, virtualization has become essential for modern computing infrastructure.

**Key Benefits:**

1. **Resource Utilization**: Most servers use only 10-15% of their capacity. Virtualization allows full hardware utilization.
2. **Server Consolidation**: Multiple virtual servers on one physical machine reduce space, power, and cooling costs.
3. **Isolation**: VMs provide greater isolation than processes, enhancing security and stability.
4. **Migration**: VMs can be moved between physical hosts with minimal downtime.
5. **Testing & Development**: Safe environments for testing without affecting production systems."#,
            practical: r#"**Real-World Applications:**

- Web hosting companies use VMs to provide isolated environments for customers
- Data centers consolidate thousands of physical servers into fewer, more efficient hosts
- Development teams create isolated testing environments
- Cloud providers like AWS, Azure use virtualization as their foundation

**Your HP Pavilion Gaming Laptop Context:**

With 32GB RAM and Intel i5-8300H, your laptop can efficiently run multiple VMs:

- Host OS: 8GB RAM
- Primary Xen VM: 16GB RAM
- Additional test VMs: 4-8GB each
- Intel VT-x support enables hardware-assisted virtualization"#,
            commands: &[],
            validation: &[
                "Explain virtualization in your own words",
                "List 3 benefits of virtualization for your development setup",
                "Identify how your HP laptop specifications support virtualization",
            ],
        },
    },
    LearningStep {
        id: 2,
        title: "HP Pavilion Gaming Hardware Assessment",
        phase: "Getting Started",
        difficulty: Difficulty::Beginner,
        estimated_time: "45 minutes",
        description: "Assess your specific hardware capabilities and prepare optimization strategy.",
        objectives: &[
            "Verify Intel VT-x virtualization support in BIOS",
            "Confirm 32GB RAM upgrade installation and recognition",
            "Test NVIDIA GTX 1050 Ti compatibility for passthrough",
            "Prepare system for VMware Workstation installation",
        ],
        content: StepContent {
            theory: r#"Your HP Pavilion Gaming 15-cx0049ne laptop specifications:

**Original Specifications:**

- CPU: Intel Core i5-8300H (4 cores, 8 threads, 2.3-4.0 GHz)
- Original RAM: 8GB DDR4-2666 (4GB x 2)
- GPU: NVIDIA GeForce GTX 1050 Ti (4GB GDDR5)
- Storage: Typically 1TB HDD + 128GB SSD
- Chipset: Intel HM370

**Your Upgraded Specifications:**

- RAM: 32GB DDR4 (16GB x 2) - Excellent for virtualization
- All other specs remain the same

**Virtualization Capabilities:**

- Intel VT-x: Hardware-assisted virtualization support
- Intel VT-d: IOMMU support for device passthrough
- EPT (Extended Page Tables): Memory virtualization acceleration
- NVIDIA GPU: Passthrough capable with proper configuration"#,
            practical: r#"**Hardware Verification Steps:**

1. **BIOS Configuration Check:** Restart the laptop and enter BIOS (usually F10 or F2 during boot). Navigate to Advanced/Security settings, verify "Intel Virtualization Technology" is ENABLED, verify "VT-d" is ENABLED (if available), and disable "Fast Boot" for better VM compatibility.
2. **RAM Verification:** Task Manager → Performance → Memory should show ~32GB total. Some may be reserved by integrated graphics.
3. **CPU Features Check:** Download CPU-Z or HWiNFO64, verify VT-x support in CPU features, and check for EPT (Extended Page Tables) support.
4. **GPU Status:** Device Manager → Display adapters should show both Intel UHD Graphics 630 and NVIDIA GTX 1050 Ti. Update NVIDIA drivers to the latest version.
5. **Storage Optimization:** Ensure the SSD has at least 50GB free for VM storage. Consider an external SSD for additional VM storage if needed."#,
            commands: &[
                "systeminfo | findstr /C:\"Hyper-V\"",
                "wmic cpu get VirtualizationFirmwareEnabled",
                "bcdedit /enum | findstr /C:\"hypervisorlaunchtype\"",
            ],
            validation: &[
                "BIOS virtualization features are enabled",
                "32GB RAM is properly recognized by system",
                "Both Intel and NVIDIA graphics are functioning",
                "CPU supports VT-x and EPT features",
                "System is ready for VMware Workstation installation",
            ],
        },
    },
    LearningStep {
        id: 3,
        title: "VMware Workstation Installation & Configuration",
        phase: "Getting Started",
        difficulty: Difficulty::Beginner,
        estimated_time: "60 minutes",
        description: "Install and configure VMware Workstation for optimal Xen development and testing.",
        objectives: &[
            "Download and install VMware Workstation Pro",
            "Configure VM settings for Xen development",
            "Create base Linux VM for Xen installation",
            "Optimize VMware settings for your hardware",
        ],
        content: StepContent {
            theory: r#"VMware Workstation Pro is the recommended platform for learning and testing Xen because:

**Why VMware for Xen Learning:**

1. **Nested Virtualization**: VMware supports running hypervisors inside VMs
2. **Hardware Acceleration**: Exposes VT-x to guest VMs
3. **Snapshot Management**: Easy rollback during learning
4. **Network Flexibility**: Multiple network configurations for testing
5. **Resource Control**: Precise allocation of CPU, RAM, storage

**Xen as Type-1 vs VMware as Type-2:**

- Xen is a "bare-metal" Type-1 hypervisor (runs directly on hardware)
- VMware Workstation is a Type-2 hypervisor (runs on Windows/Linux)
- For learning, we'll run Xen inside VMware (nested virtualization)
- In production, Xen would replace your host OS entirely"#,
            practical: r#"**VMware Workstation Installation:**

1. **Download VMware Workstation Pro:** Visit the VMware website and download the latest version. A 30-day trial is available for learning purposes; consider an educational license if eligible.
2. **Installation Requirements:** Windows 10/11 x64 host OS, minimum 4GB RAM (you have 32GB), 1.5GB disk space for the application, and additional space for VMs (recommend 100GB+).
3. **Post-Installation Configuration:** Enable virtualization engine features, configure the default VM location (preferably on SSD), set memory allocation limits (leave 8-12GB for the host), and enable hardware acceleration features.
4. **HP Pavilion Specific Settings:** Allocate up to 20GB to VMs (keep 12GB for the host), enable all CPU virtualization features, configure graphics for the NVIDIA GPU if needed, and set the power plan to "High Performance" for testing."#,
            commands: &[
                "# Check Windows version compatibility",
                "systeminfo | findstr /C:\"OS Name\" /C:\"OS Version\"",
                "# Verify Windows Hyper-V is disabled (conflicts with VMware)",
                "dism.exe /Online /Disable-Feature:Microsoft-Hyper-V-All",
            ],
            validation: &[
                "VMware Workstation Pro is installed and activated",
                "Virtualization features are enabled in VMware preferences",
                "Windows Hyper-V is disabled to avoid conflicts",
                "VM storage location is configured on fastest drive",
                "Memory allocation is optimized for 32GB system",
            ],
        },
    },
    LearningStep {
        id: 4,
        title: "Linux Host VM Creation for Xen",
        phase: "Getting Started",
        difficulty: Difficulty::Beginner,
        estimated_time: "75 minutes",
        description: "Create and configure a Linux virtual machine optimized for Xen hypervisor installation.",
        objectives: &[
            "Create Ubuntu Server VM with optimal specifications",
            "Configure VM hardware for Xen requirements",
            "Install and update Ubuntu Server",
            "Prepare system for Xen hypervisor installation",
        ],
        content: StepContent {
            theory: r#"For Xen learning and development, we need a Linux host VM that will serve as our Xen Domain 0. This VM must be configured with specific requirements.

**Recommended Linux Distribution:**

Ubuntu Server 22.04 LTS or 24.04 LTS:

- Excellent Xen package support
- Long-term support and stability
- Comprehensive documentation
- Active community support

**VM Hardware Requirements for Xen:**

- CPU: 4 cores (from your i5-8300H)
- RAM: 16GB (leaving 8GB for host, 8GB reserve)
- Storage: 80GB+ (50GB system + 30GB for guest VMs)
- Network: NAT or Bridged for internet access
- Virtualization: Enable VT-x passthrough"#,
            practical: r#"**VMware VM Creation Steps:**

1. **Create New Virtual Machine:** Choose "Typical" configuration, select "I will install the operating system later", pick Linux → Ubuntu 64-bit, name it "Xen-Development-Host", and place it on your fastest drive (SSD preferred).
2. **Hardware Configuration:** 16384 MB memory, 4 processor cores, an 80GB disk split into multiple files, NAT network adapter, and remove unused hardware (sound, printer).
3. **Advanced Settings:** Under Processors → Virtualization engine, enable "Virtualize Intel VT-x/EPT or AMD-V/RVI", "Virtualize CPU performance counters", and "Virtualize IOMMU".
4. **Ubuntu Server Installation:** Download the Ubuntu Server 22.04 LTS ISO, attach it to the VM CD/DVD drive, boot and follow the installation wizard, choose minimal installation, enable the SSH server, and create a user account (avoid 'root' for security).
5. **Post-Installation Setup:** Update the system, install essential tools (build-essential, git, wget, curl), install VMware Tools (open-vm-tools), and configure SSH for development access."#,
            commands: &[
                "# System update and essential packages",
                "sudo apt update && sudo apt upgrade -y",
                "sudo apt install -y build-essential git wget curl vim htop",
                "sudo apt install -y open-vm-tools",
                "# Verify virtualization support in VM",
                "grep -E '(vmx|svm)' /proc/cpuinfo",
                "sudo dmesg | grep -i virtualization",
            ],
            validation: &[
                "Ubuntu Server VM boots successfully",
                "32GB host RAM allows 16GB VM allocation without performance issues",
                "VM can access internet for package downloads",
                "Virtualization features are available inside VM",
                "SSH access is configured for development",
                "VMware Tools are installed and functioning",
            ],
        },
    },
    LearningStep {
        id: 5,
        title: "Xen Project Overview & Architecture Deep Dive",
        phase: "Getting Started",
        difficulty: Difficulty::Beginner,
        estimated_time: "90 minutes",
        description: "Master the fundamental architecture and concepts of the Xen Project hypervisor.",
        objectives: &[
            "Understand Xen's Type-1 hypervisor architecture",
            "Learn about Domain 0 and Domain U concepts",
            "Explore paravirtualization vs hardware-assisted virtualization",
            "Understand the split driver model and inter-domain communication",
        ],
        content: StepContent {
            theory: r#"**The Xen Project Hypervisor Architecture:**

Xen is an open-source Type-1 (bare-metal) hypervisor that runs directly on hardware, managing multiple guest operating systems called "domains."

**Core Components:**

1. **Xen Hypervisor**: Minimal codebase (~1MB) running in ring 0. Manages CPU scheduling, memory allocation, and interrupt handling; provides the hypercall interface for guests and implements security and isolation mechanisms.
2. **Domain 0 (dom0)**: First and most privileged domain loaded at boot. Contains hardware drivers and administrative tools, provides device backends for guest domains, and manages other domains (create, destroy, migrate). Typically runs Linux; can run NetBSD or Solaris.
3. **Domain U (domU)**: Unprivileged guest domains running user workloads. Cannot directly access hardware; they use frontend drivers communicating with dom0 backends. Can be paravirtualized (PV) or hardware-assisted (HVM).

**Virtualization Types in Xen:**

- **Paravirtualization (PV)**: Requires guest OS modification, offers near-native performance
- **Hardware-Assisted (HVM)**: Runs unmodified OSes using Intel VT-x/AMD-V
- **Hybrid (PV-on-HVM)**: Best of both worlds - unmodified OS with PV drivers"#,
            practical: r#"**Understanding Your Hardware in Xen Context:**

**Intel i5-8300H Benefits for Xen:**

- VT-x: Enables HVM guests (Windows, unmodified Linux)
- EPT: Hardware-assisted memory virtualization
- 4 cores/8 threads: Excellent for multiple domains
- Turbo boost: Dynamic performance scaling

**32GB RAM Allocation Strategy:**

- Host OS (Windows): 8GB
- Domain 0 (Xen management): 4-6GB
- Primary domU: 8-12GB
- Additional domUs: 4GB each
- Reserve: 4-8GB for system stability

**NVIDIA GTX 1050 Ti Considerations:**

- Primary display: Intel UHD Graphics 630
- GPU passthrough: GTX 1050 Ti to specific domU
- IOMMU required for secure passthrough
- VGA passthrough enables native gaming performance in VM

**Storage Layout for Xen:**

- Host OS: 40GB (Windows + applications)
- Xen Domain 0: 20GB (Linux + Xen tools)
- Domain U images: 15-20GB each
- Shared storage: 10GB for ISOs, configs
- Swap/page files: 4-8GB"#,
            commands: &[
                "# Check CPU virtualization features",
                "cat /proc/cpuinfo | grep -E '(vmx|svm|ept|vpid)'",
                "# Check IOMMU support",
                "dmesg | grep -E '(DMAR|IOMMU)'",
                "# Memory information",
                "free -h && cat /proc/meminfo | grep MemTotal",
            ],
            validation: &[
                "Can explain the difference between Type-1 and Type-2 hypervisors",
                "Understands the roles of Domain 0 and Domain U",
                "Knows the benefits of paravirtualization vs HVM",
                "Can describe how your hardware specifications support Xen",
                "Understands memory and CPU allocation strategies",
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ids_are_sequential() {
        for (index, step) in learning_steps().iter().enumerate() {
            assert_eq!(step.id, index as u32 + 1);
        }
    }

    #[test]
    fn test_step_by_id() {
        assert_eq!(step_by_id(1).unwrap().title, "Understanding Virtualization Fundamentals");
        assert!(step_by_id(0).is_none());
        assert!(step_by_id(6).is_none());
    }

    #[test]
    fn test_every_step_has_objectives_and_validation() {
        for step in learning_steps() {
            assert!(!step.objectives.is_empty());
            assert!(!step.content.validation.is_empty());
        }
    }
}
